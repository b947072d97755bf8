//! # Shared data model
//!
//! The types every other crate in the workspace agrees on: the validated
//! [`Sample`], the index-carrying [`DataPoint`], and the small enums used to
//! label points once they have been classified.

pub mod enums;
pub mod error;
pub mod sample;

// Re-export the core types to provide a clean public API.
pub use enums::{FenceSide, PointClass};
pub use error::CoreError;
pub use sample::{DataPoint, Sample};
