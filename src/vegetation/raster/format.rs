//! Format detection and the upload allow-list.

use std::path::Path;

use crate::vegetation::common::error::Result;
use crate::vegetation::raster::image_reader::ImageCrateReader;
use crate::vegetation::raster::reader::RasterReader;
use crate::vegetation::raster::tiff_reader::TiffRasterReader;
use crate::vegetation::raster::types::RgbRaster;

/// File extensions accepted as analysis input (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tiff", "tif"];

const TIFF_MAGIC: [&[u8; 4]; 4] = [b"II*\0", b"MM\0*", b"II+\0", b"MM\0+"];

pub fn is_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

/// Default reader: TIFF goes through the `tiff` crate, everything else through `image`.
pub struct FormatAwareReader {
    tiff: TiffRasterReader,
    image: ImageCrateReader,
}

impl FormatAwareReader {
    pub fn new() -> Self {
        Self {
            tiff: TiffRasterReader,
            image: ImageCrateReader,
        }
    }

    fn is_tiff(data: &[u8]) -> bool {
        data.get(..4)
            .is_some_and(|head| TIFF_MAGIC.iter().any(|magic| head == &magic[..]))
    }
}

impl Default for FormatAwareReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterReader for FormatAwareReader {
    fn read_raster(&self, data: &[u8]) -> Result<RgbRaster> {
        if Self::is_tiff(data) {
            self.tiff.read_raster(data)
        } else {
            self.image.read_raster(data)
        }
    }
}
