//! Per-feature value reports
//!
//! A feature report tells whether a feature behaves like a small set of
//! categories or like a continuous measurement, which decides how it should be
//! treated downstream.

use std::{borrow::Borrow, io};

use essaylab_stats::{descriptive, histogram::ValueHistogram};

use crate::{AnalysisError, UnknownFeatureError, instance::EssayInstance};

/// Features with at most this many distinct values are reported as discrete.
pub const DISCRETE_VALUE_LIMIT: usize = 20;

/// Counts the occurrences of each distinct value of `feature`.
///
/// # Examples
///
/// ```
/// use essaylab_analysis::{feature_report, instance::EssayInstance};
///
/// let instances = vec![
///     EssayInstance::new(1, 1, 2).with_feature("grade", 1.0),
///     EssayInstance::new(2, 1, 3).with_feature("grade", 1.0),
///     EssayInstance::new(3, 1, 4).with_feature("grade", 2.0),
/// ];
/// let histogram = feature_report::build_histogram(&instances, "grade").unwrap();
/// assert_eq!(histogram.sorted(), vec![(1.0, 2), (2.0, 1)]);
/// ```
pub fn build_histogram<T>(
    instances: &[T],
    feature: &str,
) -> Result<ValueHistogram, UnknownFeatureError>
where
    T: Borrow<EssayInstance>,
{
    let mut histogram = ValueHistogram::default();
    for instance in instances {
        histogram.insert(instance.borrow().feature(feature)?);
    }
    Ok(histogram)
}

/// Arithmetic mean of `feature` over `instances`.
///
/// An empty input yields `NaN`.
pub fn get_mean<T>(instances: &[T], feature: &str) -> Result<f64, UnknownFeatureError>
where
    T: Borrow<EssayInstance>,
{
    let values = instances
        .iter()
        .map(|instance| instance.borrow().feature(feature))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(descriptive::mean(values))
}

#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum FeatureKind {
    /// Few distinct values; `(value, count)` sorted ascending by value
    Discrete { values: Vec<(f64, u64)> },
    /// More than [`DISCRETE_VALUE_LIMIT`] distinct values
    Continuous { distinct_values: usize },
}

impl FeatureKind {
    #[must_use]
    pub fn from_histogram(histogram: &ValueHistogram) -> Self {
        if histogram.distinct_values() <= DISCRETE_VALUE_LIMIT {
            Self::Discrete {
                values: histogram.sorted(),
            }
        } else {
            Self::Continuous {
                distinct_values: histogram.distinct_values(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureReport {
    pub feature: String,
    pub kind: FeatureKind,
    pub mean: f64,
}

impl FeatureReport {
    pub fn from_instances<T>(instances: &[T], feature: &str) -> Result<Self, UnknownFeatureError>
    where
        T: Borrow<EssayInstance>,
    {
        let histogram = build_histogram(instances, feature)?;
        let mean = get_mean(instances, feature)?;
        Ok(Self {
            feature: feature.to_owned(),
            kind: FeatureKind::from_histogram(&histogram),
            mean,
        })
    }

    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.kind.is_discrete()
    }

    pub fn write_to<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writeln!(out, "Analysis of feature {}", self.feature)?;
        match &self.kind {
            FeatureKind::Discrete { values } => {
                writeln!(out, "\tdiscrete, {} values", values.len())?;
                for (value, count) in values {
                    writeln!(out, "\t\t{value}: {count}")?;
                }
            }
            FeatureKind::Continuous { .. } => writeln!(out, "\tcontinuous")?,
        }
        writeln!(out, "\tmean: {}", self.mean)
    }
}

/// Writes the value report of `feature` over `instances` to `out`.
///
/// The report is always written; nothing is written if a feature lookup fails.
pub fn analyse_feature<T, W>(
    instances: &[T],
    feature: &str,
    out: &mut W,
) -> Result<FeatureReport, AnalysisError>
where
    T: Borrow<EssayInstance>,
    W: io::Write,
{
    let report = FeatureReport::from_instances(instances, feature)?;
    report.write_to(out)?;
    Ok(report)
}
