//! Analysis orchestration module
//!
//! Ties decoding, index computation and scoring together for files and byte buffers.

mod config;
mod pipeline;


pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use pipeline::{Comparison, VegetationPipeline};
