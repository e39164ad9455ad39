//! Infrared band estimation from visible light.
//!
//! The default [`VisibleLightSynthesizer`] is an approximation, not physical sensing:
//! ordinary cameras record no infrared, so NIR and SWIR are linear blends of the
//! visible channels. Indices computed from them are proxies. Sources with real
//! multispectral bands should implement [`BandSynthesizer`] instead.

use ndarray::{Array2, ArrayView3, Axis};
use crate::vegetation::bands::types::{InfraredBands, VisibleBands};
use crate::vegetation::common::error::{AnalysisError, Result};
use crate::vegetation::raster::types::{RGB_CHANNELS, RgbRaster};

const U8_MAX: f64 = 255.0;

/// Strategy producing infrared channels from visible ones.
///
/// Implementations must return arrays with the same shape as the inputs, values in [0, 1].
pub trait BandSynthesizer {
    fn synthesize(&self, visible: &VisibleBands) -> InfraredBands;
}

/// Heuristic blend used when only RGB imagery is available.
///
/// - `nir = clip(0.8 * green + 0.2 * red, 0, 1)`
/// - `swir = clip(0.6 * red + 0.4 * blue, 0, 1)`
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibleLightSynthesizer;

impl VisibleLightSynthesizer {
    pub const NIR_GREEN_WEIGHT: f64 = 0.8;
    pub const NIR_RED_WEIGHT: f64 = 0.2;
    pub const SWIR_RED_WEIGHT: f64 = 0.6;
    pub const SWIR_BLUE_WEIGHT: f64 = 0.4;
}

impl BandSynthesizer for VisibleLightSynthesizer {
    fn synthesize(&self, visible: &VisibleBands) -> InfraredBands {
        let nir = (&visible.green * Self::NIR_GREEN_WEIGHT + &visible.red * Self::NIR_RED_WEIGHT)
            .mapv_into(|v| v.clamp(0.0, 1.0));
        let swir = (&visible.red * Self::SWIR_RED_WEIGHT + &visible.blue * Self::SWIR_BLUE_WEIGHT)
            .mapv_into(|v| v.clamp(0.0, 1.0));

        InfraredBands { nir, swir }
    }
}

/// Splits an interleaved raster into red/green/blue planes scaled to [0, 1].
pub fn split_visible(raster: &RgbRaster) -> Result<VisibleBands> {
    let cube = ArrayView3::from_shape(
        (raster.height, raster.width, RGB_CHANNELS),
        raster.data.as_slice(),
    )
    .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

    let plane = |channel: usize| -> Array2<f64> {
        cube.index_axis(Axis(2), channel).mapv(|v| f64::from(v) / U8_MAX)
    };

    Ok(VisibleBands {
        red: plane(0),
        green: plane(1),
        blue: plane(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_visible_normalizes_channels() {
        let raster = RgbRaster::new(2, 1, vec![255, 0, 51, 0, 255, 102]).unwrap();

        let visible = split_visible(&raster).unwrap();

        assert_eq!(visible.red.dim(), (1, 2));
        assert_eq!(visible.red[[0, 0]], 1.0);
        assert_eq!(visible.green[[0, 1]], 1.0);
        assert!((visible.blue[[0, 0]] - 0.2).abs() < 1e-12);
        assert!((visible.blue[[0, 1]] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_split_visible_keeps_row_major_layout() {
        // 1 wide, 2 tall: first row red, second row blue
        let raster = RgbRaster::new(1, 2, vec![255, 0, 0, 0, 0, 255]).unwrap();

        let visible = split_visible(&raster).unwrap();

        assert_eq!(visible.red[[0, 0]], 1.0);
        assert_eq!(visible.red[[1, 0]], 0.0);
        assert_eq!(visible.blue[[1, 0]], 1.0);
    }

    #[test]
    fn test_heuristic_blend() {
        let raster = RgbRaster::filled(2, 2, [100, 200, 50]);
        let visible = split_visible(&raster).unwrap();

        let infrared = VisibleLightSynthesizer.synthesize(&visible);

        let expected_nir = 0.8 * (200.0 / 255.0) + 0.2 * (100.0 / 255.0);
        let expected_swir = 0.6 * (100.0 / 255.0) + 0.4 * (50.0 / 255.0);
        assert!(infrared.nir.iter().all(|v| (v - expected_nir).abs() < 1e-12));
        assert!(infrared.swir.iter().all(|v| (v - expected_swir).abs() < 1e-12));
    }

    #[test]
    fn test_bands_stay_in_unit_range() {
        let raster = RgbRaster::new(2, 1, vec![255, 255, 255, 0, 0, 0]).unwrap();
        let visible = split_visible(&raster).unwrap();

        let infrared = VisibleLightSynthesizer.synthesize(&visible);

        for v in infrared.nir.iter().chain(infrared.swir.iter()) {
            assert!((0.0..=1.0).contains(v));
        }
    }
}
