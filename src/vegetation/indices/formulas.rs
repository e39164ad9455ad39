//! Elementwise index formulas.
//!
//! Every function returns an array of the input shape with values clipped to the
//! index's [`valid_range`](crate::vegetation::indices::SpectralIndex::valid_range).
//! Denominators that are exactly zero at a pixel are replaced by [`EPSILON`] before
//! dividing, so no NaN or infinity can leave this module for finite inputs.

use ndarray::Array2;
use crate::vegetation::indices::types::SpectralIndex;

pub const EPSILON: f64 = 1e-10;

/// Soil brightness correction factor for SAVI.
pub const SAVI_L: f64 = 0.5;

/// NDVI of bare soil and of full canopy, used to rescale NDVI into FVC.
pub const NDVI_SOIL: f64 = 0.05;
pub const NDVI_VEGETATION: f64 = 0.95;

fn guard_zero(denominator: Array2<f64>) -> Array2<f64> {
    denominator.mapv_into(|d| if d == 0.0 { EPSILON } else { d })
}

fn clip(values: Array2<f64>, index: SpectralIndex) -> Array2<f64> {
    let (lo, hi) = index.valid_range();
    values.mapv_into(|v| v.clamp(lo, hi))
}

/// `(nir - red) / (nir + red)`
pub fn ndvi(nir: &Array2<f64>, red: &Array2<f64>) -> Array2<f64> {
    let denominator = guard_zero(nir + red);
    clip((nir - red) / &denominator, SpectralIndex::Ndvi)
}

/// `2.5 * (nir - red) / (nir + 6 * red - 7.5 * blue + 1)`
pub fn evi(nir: &Array2<f64>, red: &Array2<f64>, blue: &Array2<f64>) -> Array2<f64> {
    let denominator = guard_zero(nir + &(red * 6.0) - &(blue * 7.5) + 1.0);
    clip((nir - red) * 2.5 / &denominator, SpectralIndex::Evi)
}

/// `(green - nir) / (green + nir)`
pub fn ndwi(green: &Array2<f64>, nir: &Array2<f64>) -> Array2<f64> {
    let denominator = guard_zero(green + nir);
    clip((green - nir) / &denominator, SpectralIndex::Ndwi)
}

/// `(nir - red) / (nir + red + L) * (1 + L)`
pub fn savi(nir: &Array2<f64>, red: &Array2<f64>) -> Array2<f64> {
    let denominator = guard_zero(nir + red + SAVI_L);
    clip((nir - red) / &denominator * (1.0 + SAVI_L), SpectralIndex::Savi)
}

/// `-ln(max(0.69 - 0.59 * ndvi, eps)) / 0.91`, from the clipped NDVI raster.
pub fn lai(ndvi: &Array2<f64>) -> Array2<f64> {
    let lai = ndvi.mapv(|v| -(0.69 - 0.59 * v).max(EPSILON).ln() / 0.91);
    clip(lai, SpectralIndex::Lai)
}

/// `(ndvi - 0.05) / (0.95 - 0.05)`, from the clipped NDVI raster.
pub fn fvc(ndvi: &Array2<f64>) -> Array2<f64> {
    let fvc = ndvi.mapv(|v| (v - NDVI_SOIL) / (NDVI_VEGETATION - NDVI_SOIL));
    clip(fvc, SpectralIndex::Fvc)
}
