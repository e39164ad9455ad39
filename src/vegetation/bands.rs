//! Band synthesis module
//!
//! Splits an RGB raster into normalized channels and estimates the infrared
//! bands the vegetation indices need.

mod synthesizer;
pub mod types;

pub use synthesizer::{BandSynthesizer, VisibleLightSynthesizer, split_visible};
pub use types::{ChannelSet, InfraredBands, VisibleBands};
