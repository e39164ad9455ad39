//! Raster data types

use crate::vegetation::common::error::{AnalysisError, Result};

/// Number of interleaved samples per pixel.
pub const RGB_CHANNELS: usize = 3;

/// Decoded 8-bit RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Pixel data interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<u8>,
}

impl RgbRaster {
    /// Builds a raster, rejecting buffers whose length does not match `width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let raster = Self { width, height, data };
        if !raster.is_well_formed() {
            return Err(AnalysisError::DecodeError(format!(
                "expected {} RGB samples for {}x{}, got {}",
                width.saturating_mul(height).saturating_mul(RGB_CHANNELS),
                width,
                height,
                raster.data.len()
            )));
        }
        Ok(raster)
    }

    /// Raster where every pixel has the same color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            data: rgb.repeat(width * height),
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True when the raster is non-empty and holds exactly three samples per pixel.
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self
                .width
                .checked_mul(self.height)
                .and_then(|n| n.checked_mul(RGB_CHANNELS))
                .is_some_and(|n| n == self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = RgbRaster::new(2, 2, vec![0u8; 11]);
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }

    #[test]
    fn test_new_rejects_empty_raster() {
        assert!(RgbRaster::new(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn test_filled_layout() {
        let raster = RgbRaster::filled(3, 2, [10, 20, 30]);
        assert_eq!(raster.pixel_count(), 6);
        assert_eq!(&raster.data[..6], &[10, 20, 30, 10, 20, 30]);
        assert!(raster.is_well_formed());
    }
}
