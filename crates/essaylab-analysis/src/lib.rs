//! Feature diagnostics for scored essay instances
//!
//! This crate analyzes already-featurized essay records during feature
//! engineering: how strongly each feature tracks the gold score, and what
//! values a feature actually takes.
//!
//! # Overview
//!
//! All analyses are meant to run on one essay set at a time, since features are
//! normalized per prompt upstream and mixing sets blurs the result.
//!
//! 1. **Select a set** ([`filter::filter`]): Keep the instances of one task/prompt
//! 2. **Correlate** ([`correlation::pearson`], [`correlation::correlation_test`]):
//!    Pearson coefficient of every feature against `domain1_score`
//! 3. **Inspect values** ([`feature_report::analyse_feature`]): Distinct-value
//!    histogram, discrete/continuous classification, and mean
//! 4. **Drive** ([`driver::analysis`]): Run a configured sequence of the above
//!
//! Degenerate data is not an error: a constant feature correlates to `NaN` and
//! the mean of an empty set is `NaN`.
//!
//! # Examples
//!
//! ```
//! use essaylab_analysis::{
//!     Verbosity, correlation, feature_report, filter, instance::EssayInstance,
//! };
//! # fn main() -> Result<(), essaylab_analysis::AnalysisError> {
//!
//! let instances = vec![
//!     EssayInstance::new(1, 1, 2).with_feature("grade", 4.0),
//!     EssayInstance::new(2, 1, 4).with_feature("grade", 8.0),
//!     EssayInstance::new(3, 2, 3).with_feature("grade", 6.0),
//! ];
//!
//! let set_one = filter::filter(&instances, 1);
//! let r = correlation::pearson(&set_one, "grade")?;
//! assert!((r - 1.0).abs() < 1e-6);
//!
//! let mut out = Vec::new();
//! correlation::correlation_test(&instances, 1, Verbosity::Verbose, &mut out)?;
//! let report = feature_report::analyse_feature(&set_one, "grade", &mut out)?;
//! assert!(report.is_discrete());
//! # Ok(())
//! # }
//! ```

use std::io;

pub use self::{config::Verbosity, instance::UnknownFeatureError};

pub mod config;
pub mod correlation;
pub mod driver;
pub mod feature_report;
pub mod filter;
pub mod instance;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no instances found for essay set {set}")]
pub struct EmptyInputError {
    pub set: u32,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    #[display("{_0}")]
    EmptyInput(#[error(not(source))] EmptyInputError),
    #[display("{_0}")]
    UnknownFeature(#[error(not(source))] UnknownFeatureError),
    #[display("failed to write analysis report")]
    Io(io::Error),
}
