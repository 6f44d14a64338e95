//! Numeric primitives for essay feature diagnostics.
//!
//! This crate provides the small set of statistics the feature analyzer
//! reports on:
//!
//! - **Descriptive statistics**: Arithmetic mean of a dataset
//! - **Correlation**: Pearson correlation coefficient over paired observations
//! - **Value histogram**: Occurrence counts per distinct value
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`correlation`]: Pearson correlation between two paired sequences
//! - [`histogram`]: Exact-value frequency tables used to tell discrete features from continuous ones
//!
//! # Examples
//!
//! ## Computing a mean
//!
//! ```
//! use essaylab_stats::descriptive;
//!
//! let values = [2.0, 4.0, 6.0];
//! assert_eq!(descriptive::mean(values), 4.0);
//! ```
//!
//! ## Correlating paired values
//!
//! ```
//! use essaylab_stats::correlation;
//!
//! let pairs = [(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)];
//! let r = correlation::pearson(pairs);
//! assert!((r - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Counting distinct values
//!
//! ```
//! use essaylab_stats::histogram::ValueHistogram;
//!
//! let histogram = ValueHistogram::new([1.0, 1.0, 2.0]);
//! assert_eq!(histogram.distinct_values(), 2);
//! assert_eq!(histogram.count(1.0), 2);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;
