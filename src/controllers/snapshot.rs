use std::path::Path;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::{ConfigError, ViewerConfig};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::viewport::Viewport;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error("no frame has been rendered yet")]
    NothingRendered,
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a single frame without a window and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    config: ViewerConfig,
    raster: Option<Raster>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, config: ViewerConfig) -> Self {
        Self {
            presenter,
            config,
            raster: None,
        }
    }

    pub fn generate(&mut self, viewport: &Viewport) -> Result<Duration, SnapshotError> {
        self.config.validate()?;
        let renderer = self.config.renderer()?;
        let dispatcher = self.config.dispatcher()?;
        let mut raster = Raster::new(self.config.width, self.config.height)?;

        log::info!(
            "rendering {}x{} at offset=({}, {}) zoom={} with {} iterations",
            self.config.width,
            self.config.height,
            viewport.offset_x(),
            viewport.offset_y(),
            viewport.zoom(),
            self.config.max_iterations
        );

        let start = Instant::now();
        render_frame(
            &renderer,
            viewport,
            &mut raster,
            self.config.band_count,
            &dispatcher,
            &NeverCancel,
        )?;
        let duration = start.elapsed();

        log::info!("rendered in {duration:?}");
        self.raster = Some(raster);

        Ok(duration)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let raster = self.raster.as_ref().ok_or(SnapshotError::NothingRendered)?;
        self.presenter.present(raster, filepath.as_ref())?;
        log::info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }

    #[must_use]
    pub fn raster(&self) -> Option<&Raster> {
        self.raster.as_ref()
    }
}
