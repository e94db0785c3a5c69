use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use crate::storage::write_ppm::write_ppm;

#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(filepath)?;
        write_ppm(raster, BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file_creating_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_viewer_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let raster = Raster::new(3, 2).unwrap();

        PpmFilePresenter::new().present(&raster, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
