//! Score/feature correlation
//!
//! Pearson coefficients between `domain1_score` and each feature of an essay
//! set. The coefficient is computed over per-id "rank" tables that hold the raw
//! score and the feature value in fixed-point form (scaled by
//! [`FEATURE_SCALE`] and truncated toward zero). The fixed-point transform is
//! monotonic, so scaling a feature by a positive constant leaves the
//! coefficient unchanged up to truncation error.
//!
//! Correlate one essay set at a time: per-set feature normalization happens
//! upstream and nothing here compensates for mixing sets.

use std::{borrow::Borrow, cmp::Ordering, collections::HashMap, io};

use essaylab_stats::correlation;
use serde::Serialize;

use crate::{AnalysisError, UnknownFeatureError, Verbosity, filter, instance::EssayInstance};

/// Fixed-point scale applied to feature values before correlating.
pub const FEATURE_SCALE: f64 = 10_000.0;

/// Pearson coefficient of one feature against the gold score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCorrelation {
    pub feature: String,
    pub r: f64,
}

/// Coefficients for every feature of one essay set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub set: u32,
    pub instance_count: usize,
    /// One entry per feature name of the set's first instance, in name order
    pub coefficients: Vec<FeatureCorrelation>,
}

impl CorrelationReport {
    /// Coefficients ordered by strength (`|r|` descending), `NaN` last.
    #[must_use]
    pub fn ranked(&self) -> Vec<&FeatureCorrelation> {
        let mut ranked = self.coefficients.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| match (a.r.is_nan(), b.r.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.r.abs().total_cmp(&a.r.abs()),
        });
        ranked
    }

    pub fn write_to<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writeln!(
            out,
            "Pearson correlation coefficients with domain1_score for essay set {}, {} instances",
            self.set, self.instance_count
        )?;
        for FeatureCorrelation { feature, r } in &self.coefficients {
            writeln!(out, "\tr for {feature}: {r}")?;
        }
        Ok(())
    }
}

#[expect(clippy::cast_possible_truncation)]
fn fixed_point(value: f64) -> i64 {
    (value * FEATURE_SCALE) as i64
}

/// Computes the Pearson correlation between `domain1_score` and `feature`.
///
/// Pass the instances of a single essay set. The input slice is left untouched;
/// ordering happens on a private list of references.
///
/// A feature that is constant over the instances has zero variance and yields
/// `NaN`, as does an empty input.
///
/// # Examples
///
/// ```
/// use essaylab_analysis::{correlation, instance::EssayInstance};
///
/// let instances = vec![
///     EssayInstance::new(1, 1, 1).with_feature("grade", 1.0),
///     EssayInstance::new(2, 1, 2).with_feature("grade", 2.0),
///     EssayInstance::new(3, 1, 3).with_feature("grade", 3.0),
/// ];
/// let r = correlation::pearson(&instances, "grade").unwrap();
/// assert!((r - 1.0).abs() < 1e-6);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn pearson<T>(instances: &[T], feature: &str) -> Result<f64, UnknownFeatureError>
where
    T: Borrow<EssayInstance>,
{
    let mut ordered = instances
        .iter()
        .map(Borrow::borrow)
        .collect::<Vec<&EssayInstance>>();

    // Score "rank" is the raw score.
    ordered.sort_by_key(|instance| instance.domain1_score);
    let score_ranks = ordered
        .iter()
        .map(|instance| (instance.id, instance.domain1_score))
        .collect::<HashMap<_, _>>();

    // Feature "rank" is the fixed-point feature value.
    let mut feature_ordered = ordered
        .iter()
        .map(|instance| Ok((*instance, fixed_point(instance.feature(feature)?))))
        .collect::<Result<Vec<_>, UnknownFeatureError>>()?;
    feature_ordered.sort_by_key(|(_, rank)| *rank);
    let feature_ranks = feature_ordered
        .iter()
        .map(|(instance, rank)| (instance.id, *rank))
        .collect::<HashMap<_, _>>();

    let pairs = feature_ordered.iter().filter_map(|(instance, _)| {
        let score_rank = score_ranks.get(&instance.id)?;
        let feature_rank = feature_ranks.get(&instance.id)?;
        Some((f64::from(*score_rank), *feature_rank as f64))
    });
    Ok(correlation::pearson(pairs))
}

/// Correlates every feature of essay set `set` with the gold score.
///
/// Features are enumerated from the set's first instance; all instances of a
/// set are expected to carry the same feature names.
pub fn correlate_set<T>(instances: &[T], set: u32) -> Result<CorrelationReport, AnalysisError>
where
    T: Borrow<EssayInstance>,
{
    let filtered = filter::filter_non_empty(instances, set)?;
    let coefficients = filtered[0]
        .feature_names()
        .map(|feature| {
            Ok(FeatureCorrelation {
                feature: feature.to_owned(),
                r: pearson(&filtered, feature)?,
            })
        })
        .collect::<Result<Vec<_>, UnknownFeatureError>>()?;
    Ok(CorrelationReport {
        set,
        instance_count: filtered.len(),
        coefficients,
    })
}

/// Checks that essay set `set` is non-empty and, when verbose, writes the
/// correlation of each of its features with the gold score to `out`.
///
/// In quiet mode no coefficient is computed and the returned report has no
/// coefficients. Nothing is written when the set is empty.
pub fn correlation_test<T, W>(
    instances: &[T],
    set: u32,
    verbosity: Verbosity,
    out: &mut W,
) -> Result<CorrelationReport, AnalysisError>
where
    T: Borrow<EssayInstance>,
    W: io::Write,
{
    if verbosity.is_quiet() {
        let filtered = filter::filter_non_empty(instances, set)?;
        return Ok(CorrelationReport {
            set,
            instance_count: filtered.len(),
            coefficients: vec![],
        });
    }

    let report = correlate_set(instances, set)?;
    report.write_to(out)?;
    Ok(report)
}
