//! Raster decoding module
//!
//! Turns encoded image bytes (PNG, JPEG, TIFF) into interleaved 8-bit RGB rasters.

mod reader;
mod image_reader;
mod tiff_reader;
mod format;
pub mod types;

pub use reader::RasterReader;
pub use image_reader::ImageCrateReader;
pub use tiff_reader::TiffRasterReader;
pub use format::{ALLOWED_EXTENSIONS, FormatAwareReader, is_allowed_extension};
pub use types::RgbRaster;
