use crate::vegetation::common::error::Result;
use crate::vegetation::raster::types::RgbRaster;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RgbRaster>;
}
