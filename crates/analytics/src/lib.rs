//! # Descriptive Statistics Calculator
//!
//! This crate computes the summary statistics of a one-dimensional sample:
//! count, extremes, central tendency, dispersion and quartiles.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** It has no knowledge of input formats or rendering.
//!   It depends only on `core-types`.
//! - **Stateless Calculation:** The `StatisticsEngine` takes a `Sample` and
//!   produces a `SummaryStatistics` record. Nothing is cached between calls.
//! - **One percentile method:** Quartiles come from [`percentile`], which the
//!   outlier detector reuses so both components always agree on Q1 and Q3.
//!
//! ## Public API
//!
//! - `StatisticsEngine`: the calculation logic.
//! - `SummaryStatistics` / `Mode`: the output record.
//! - `sample_variance` / `sample_std_dev`: Bessel-corrected spread on their own.
//! - `AnalyticsError`: the error returned when there is too little data.

pub mod engine;
pub mod error;
pub mod percentile;
pub mod report;

pub use engine::{StatisticsEngine, sample_std_dev, sample_variance};
pub use error::AnalyticsError;
pub use percentile::{Quartiles, percentile_sorted, quartiles};
pub use report::{Mode, SummaryStatistics};
