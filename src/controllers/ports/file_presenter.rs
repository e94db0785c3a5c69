use std::path::Path;

use crate::core::data::raster::Raster;

pub trait FilePresenterPort {
    fn present(&self, raster: &Raster, filepath: &Path) -> std::io::Result<()>;
}
