//! Impact scoring module
//!
//! Compares the metric sets of a before/after image pair and condenses the change
//! into a 0-100 score, a confidence value and an ordinal category.

mod scorer;
pub mod types;

pub use scorer::{SCORE_WEIGHTS, compute_impact, percent_change};
pub use types::{ConfidenceLevel, ImpactCategory, ImpactResult};
