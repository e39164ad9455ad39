//! PNG/JPEG reader backed by the `image` crate.

use tracing::debug;
use crate::vegetation::common::error::{AnalysisError, Result};
use crate::vegetation::raster::reader::RasterReader;
use crate::vegetation::raster::types::RgbRaster;

/// Decodes any format the `image` crate was built with and converts it to RGB8.
///
/// Alpha channels are dropped and grayscale input is expanded to three equal channels.
pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    fn read_raster(&self, data: &[u8]) -> Result<RgbRaster> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        RgbRaster::new(width as usize, height as usize, rgb.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(image: &image::DynamicImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_reads_rgb_png() {
        let png = encode_png(&image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            4,
            3,
            image::Rgb([12, 200, 40]),
        )));

        let raster = ImageCrateReader.read_raster(&png).unwrap();

        assert_eq!((raster.width, raster.height), (4, 3));
        assert_eq!(&raster.data[..3], &[12, 200, 40]);
    }

    #[test]
    fn test_drops_alpha_channel() {
        let png = encode_png(&image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([1, 2, 3, 128]),
        )));

        let raster = ImageCrateReader.read_raster(&png).unwrap();

        assert_eq!(raster.data, [1u8, 2, 3].repeat(4));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = ImageCrateReader.read_raster(b"definitely not an image");
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }
}
