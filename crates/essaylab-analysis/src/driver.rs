//! Analysis driver
//!
//! Runs a fixed sequence of diagnostics against one data set: first the
//! correlation test of each configured essay set, then the value report of
//! each configured `(set, feature)` pair.

use std::{borrow::Borrow, fmt, io, num::ParseIntError, str::FromStr};

use crate::{
    AnalysisError, Verbosity,
    correlation::{self, CorrelationReport},
    feature_report::{self, FeatureReport},
    filter,
    instance::EssayInstance,
};

/// Feature reported by the default plan.
pub const DEFAULT_FEATURE: &str = "grade";
/// Essay set analyzed by the default plan.
pub const DEFAULT_SET: u32 = 1;

/// A feature report request: `feature` over the instances of essay set `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureStep {
    pub set: u32,
    pub feature: String,
}

impl fmt::Display for FeatureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.set, self.feature)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseFeatureStepError {
    #[display("expected SET:FEATURE, got '{input}'")]
    MissingSeparator { input: String },
    #[display("invalid essay set in '{input}'")]
    InvalidSet { input: String, source: ParseIntError },
    #[display("missing feature name in '{input}'")]
    EmptyFeature { input: String },
}

impl FromStr for FeatureStep {
    type Err = ParseFeatureStepError;

    /// Parses `SET:FEATURE`, e.g. `1:grade`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (set, feature) =
            s.split_once(':')
                .ok_or_else(|| ParseFeatureStepError::MissingSeparator {
                    input: s.to_owned(),
                })?;
        let set = set
            .trim()
            .parse()
            .map_err(|source| ParseFeatureStepError::InvalidSet {
                input: s.to_owned(),
                source,
            })?;
        let feature = feature.trim();
        if feature.is_empty() {
            return Err(ParseFeatureStepError::EmptyFeature {
                input: s.to_owned(),
            });
        }
        Ok(Self {
            set,
            feature: feature.to_owned(),
        })
    }
}

/// The diagnostics [`analysis`] runs, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPlan {
    /// Essay sets to run the correlation test on
    pub correlation_sets: Vec<u32>,
    /// Feature reports to produce after the correlation tests
    pub feature_steps: Vec<FeatureStep>,
}

impl Default for AnalysisPlan {
    fn default() -> Self {
        Self {
            correlation_sets: vec![DEFAULT_SET],
            feature_steps: vec![FeatureStep {
                set: DEFAULT_SET,
                feature: DEFAULT_FEATURE.to_owned(),
            }],
        }
    }
}

/// Reports produced by one [`analysis`] run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOutcome {
    pub correlations: Vec<CorrelationReport>,
    pub features: Vec<FeatureReport>,
}

/// Runs every step of `plan` against `instances`, writing reports to `out`.
///
/// Stops at the first failing step. Reports of the steps that completed before
/// it have already been written.
pub fn analysis<T, W>(
    instances: &[T],
    plan: &AnalysisPlan,
    verbosity: Verbosity,
    out: &mut W,
) -> Result<AnalysisOutcome, AnalysisError>
where
    T: Borrow<EssayInstance>,
    W: io::Write,
{
    let mut outcome = AnalysisOutcome::default();
    for &set in &plan.correlation_sets {
        let report = correlation::correlation_test(instances, set, verbosity, out)?;
        outcome.correlations.push(report);
    }
    for step in &plan.feature_steps {
        let filtered = filter::filter(instances, step.set);
        let report = feature_report::analyse_feature(&filtered, &step.feature, out)?;
        outcome.features.push(report);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_report::FeatureKind;

    fn sample() -> Vec<EssayInstance> {
        vec![
            EssayInstance::new(1, 1, 2)
                .with_feature("grade", 4.0)
                .with_feature("words", 100.0),
            EssayInstance::new(2, 1, 4)
                .with_feature("grade", 8.0)
                .with_feature("words", 200.0),
            EssayInstance::new(3, 1, 3)
                .with_feature("grade", 6.0)
                .with_feature("words", 150.0),
            EssayInstance::new(4, 2, 1)
                .with_feature("grade", 2.0)
                .with_feature("words", 50.0),
        ]
    }

    #[test]
    fn test_parse_feature_step() {
        let step = "3:word_count".parse::<FeatureStep>().unwrap();
        assert_eq!(
            step,
            FeatureStep {
                set: 3,
                feature: "word_count".to_owned()
            }
        );
        assert_eq!(step.to_string(), "3:word_count");
        assert_eq!(" 2 : grade ".parse::<FeatureStep>().unwrap().set, 2);
    }

    #[test]
    fn test_parse_feature_step_errors() {
        assert!(matches!(
            "grade".parse::<FeatureStep>(),
            Err(ParseFeatureStepError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "x:grade".parse::<FeatureStep>(),
            Err(ParseFeatureStepError::InvalidSet { .. })
        ));
        assert!(matches!(
            "1:".parse::<FeatureStep>(),
            Err(ParseFeatureStepError::EmptyFeature { .. })
        ));
    }

    #[test]
    fn test_default_plan() {
        let plan = AnalysisPlan::default();
        assert_eq!(plan.correlation_sets, vec![1]);
        assert_eq!(plan.feature_steps, vec!["1:grade".parse().unwrap()]);
    }

    #[test]
    fn test_default_analysis_quiet() {
        let instances = sample();
        let mut out = Vec::new();
        let outcome =
            analysis(&instances, &AnalysisPlan::default(), Verbosity::Quiet, &mut out).unwrap();

        assert_eq!(outcome.correlations.len(), 1);
        assert_eq!(outcome.correlations[0].instance_count, 3);
        assert!(outcome.correlations[0].coefficients.is_empty());

        assert_eq!(outcome.features.len(), 1);
        let report = &outcome.features[0];
        assert_eq!(report.mean, 6.0);
        assert_eq!(
            report.kind,
            FeatureKind::Discrete {
                values: vec![(4.0, 1), (6.0, 1), (8.0, 1)]
            }
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Analysis of feature grade\n"));
        assert!(!text.contains("Pearson"));
    }

    #[test]
    fn test_default_analysis_verbose() {
        let instances = sample();
        let mut out = Vec::new();
        let outcome =
            analysis(&instances, &AnalysisPlan::default(), Verbosity::Verbose, &mut out).unwrap();

        let coefficients = &outcome.correlations[0].coefficients;
        assert_eq!(coefficients.len(), 2);
        for c in coefficients {
            assert!((c.r - 1.0).abs() < 1e-6, "{}: {}", c.feature, c.r);
        }

        let text = String::from_utf8(out).unwrap();
        let pearson_at = text.find("Pearson").unwrap();
        let feature_at = text.find("Analysis of feature grade").unwrap();
        assert!(pearson_at < feature_at);
    }

    #[test]
    fn test_multiple_sets() {
        let instances = sample();
        let plan = AnalysisPlan {
            correlation_sets: vec![1, 2],
            feature_steps: vec!["2:words".parse().unwrap(), "1:words".parse().unwrap()],
        };
        let mut out = Vec::new();
        let outcome = analysis(&instances, &plan, Verbosity::Verbose, &mut out).unwrap();
        assert_eq!(outcome.correlations[1].instance_count, 1);
        assert!(outcome.correlations[1].coefficients[0].r.is_nan());
        assert_eq!(outcome.features[0].mean, 50.0);
        assert_eq!(outcome.features[1].mean, 150.0);
    }

    #[test]
    fn test_missing_correlation_set_fails() {
        let instances = sample();
        let plan = AnalysisPlan {
            correlation_sets: vec![9],
            feature_steps: vec![],
        };
        let mut out = Vec::new();
        let err = analysis(&instances, &plan, Verbosity::Verbose, &mut out).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_feature_step_on_empty_set_reports_nan_mean() {
        let instances = sample();
        let plan = AnalysisPlan {
            correlation_sets: vec![],
            feature_steps: vec!["9:grade".parse().unwrap()],
        };
        let mut out = Vec::new();
        let outcome = analysis(&instances, &plan, Verbosity::Quiet, &mut out).unwrap();
        assert!(outcome.features[0].mean.is_nan());
    }
}
