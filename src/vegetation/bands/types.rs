//! Channel types shared by the band synthesizer and the index engine

use ndarray::Array2;
use crate::vegetation::common::error::{AnalysisError, Result};

/// Visible-light channels normalized to [0, 1], shape (height, width).
#[derive(Debug, Clone)]
pub struct VisibleBands {
    pub red: Array2<f64>,
    pub green: Array2<f64>,
    pub blue: Array2<f64>,
}

/// Near- and short-wave-infrared channels in [0, 1].
#[derive(Debug, Clone)]
pub struct InfraredBands {
    pub nir: Array2<f64>,
    pub swir: Array2<f64>,
}

/// The five same-shaped channels every index is computed from.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    pub red: Array2<f64>,
    pub green: Array2<f64>,
    pub blue: Array2<f64>,
    pub nir: Array2<f64>,
    pub swir: Array2<f64>,
}

impl ChannelSet {
    /// Joins visible and infrared channels, failing if any shape differs from the red channel.
    pub fn from_parts(visible: VisibleBands, infrared: InfraredBands) -> Result<Self> {
        let shape = visible.red.dim();
        let shapes = [
            ("green", visible.green.dim()),
            ("blue", visible.blue.dim()),
            ("nir", infrared.nir.dim()),
            ("swir", infrared.swir.dim()),
        ];
        if let Some((name, other)) = shapes.iter().find(|(_, s)| *s != shape) {
            return Err(AnalysisError::ComputationError(format!(
                "{} channel has shape {:?}, expected {:?}",
                name, other, shape
            )));
        }

        Ok(Self {
            red: visible.red,
            green: visible.green,
            blue: visible.blue,
            nir: infrared.nir,
            swir: infrared.swir,
        })
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.red.dim()
    }
}
