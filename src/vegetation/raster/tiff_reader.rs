//! TIFF reader backed by the `tiff` crate.
//!
//! Handles 8- and 16-bit Gray, GrayA, RGB and RGBA strips/tiles. 16-bit samples are
//! scaled down to 8 bits so every raster downstream shares the same [0, 255] range.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;
use crate::vegetation::common::error::{AnalysisError, Result};
use crate::vegetation::raster::reader::RasterReader;
use crate::vegetation::raster::types::RgbRaster;

pub struct TiffRasterReader;

/// Divisor mapping the u16 range onto the u8 range (65535 / 257 == 255).
const U16_TO_U8: u16 = 257;

fn decode_error(e: tiff::TiffError) -> AnalysisError {
    AnalysisError::DecodeError(e.to_string())
}

impl RasterReader for TiffRasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RgbRaster> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data)).map_err(decode_error)?;
        let (width, height) = decoder.dimensions().map_err(decode_error)?;
        let color_type = decoder.colortype().map_err(decode_error)?;

        let samples_per_pixel = match color_type {
            ColorType::Gray(_) => 1,
            ColorType::GrayA(_) => 2,
            ColorType::RGB(_) => 3,
            ColorType::RGBA(_) => 4,
            other => {
                return Err(AnalysisError::UnsupportedFormat(format!(
                    "TIFF color type {:?}",
                    other
                )));
            }
        };

        let samples: Vec<u8> = match decoder.read_image().map_err(decode_error)? {
            DecodingResult::U8(values) => values,
            DecodingResult::U16(values) => values.iter().map(|&v| (v / U16_TO_U8) as u8).collect(),
            _ => {
                return Err(AnalysisError::UnsupportedFormat(
                    "TIFF sample type (only 8- and 16-bit unsigned are supported)".to_string(),
                ));
            }
        };

        debug!(
            "Decoded TIFF: {}x{}, {} samples per pixel",
            width, height, samples_per_pixel
        );

        let rgb: Vec<u8> = match samples_per_pixel {
            1 => samples.iter().flat_map(|&g| [g, g, g]).collect(),
            2 => samples.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0]]).collect(),
            3 => samples,
            _ => samples.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect(),
        };

        RgbRaster::new(width as usize, height as usize, rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiff::encoder::{TiffEncoder, colortype};

    #[test]
    fn test_reads_rgb8_tiff() {
        let pixels = [10u8, 20, 30].repeat(6);
        let mut buffer = Vec::new();
        TiffEncoder::new(Cursor::new(&mut buffer))
            .unwrap()
            .write_image::<colortype::RGB8>(3, 2, &pixels)
            .unwrap();

        let raster = TiffRasterReader.read_raster(&buffer).unwrap();

        assert_eq!((raster.width, raster.height), (3, 2));
        assert_eq!(raster.data, pixels);
    }

    #[test]
    fn test_scales_gray16_to_rgb8() {
        let pixels = vec![0u16, 65535, 257 * 128, 65535];
        let mut buffer = Vec::new();
        TiffEncoder::new(Cursor::new(&mut buffer))
            .unwrap()
            .write_image::<colortype::Gray16>(2, 2, &pixels)
            .unwrap();

        let raster = TiffRasterReader.read_raster(&buffer).unwrap();

        assert_eq!(&raster.data[..6], &[0, 0, 0, 255, 255, 255]);
        assert_eq!(&raster.data[6..9], &[128, 128, 128]);
    }

    #[test]
    fn test_truncated_tiff_fails() {
        let result = TiffRasterReader.read_raster(b"II*\0\x08\0\0\0");
        assert!(result.is_err());
    }
}
