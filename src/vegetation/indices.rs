//! Index engine module
//!
//! Computes the six vegetation/water indices from a [`ChannelSet`](crate::vegetation::bands::ChannelSet)
//! and reduces each of them to summary statistics.

pub mod formulas;
mod engine;
mod stats;
mod metrics;
pub mod types;

pub use engine::{IndexRasters, compute_metrics, compute_metrics_with};
pub use metrics::MetricSet;
pub use stats::IndexStats;
pub use types::{SpectralIndex, Statistic};
