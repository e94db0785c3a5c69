//! Runtime configuration shared by the viewer and snapshot binaries.

use std::num::{NonZeroU32, NonZeroUsize};

use rayon::ThreadPoolBuildError;
use thiserror::Error;

use crate::controllers::interactive::{RenderSettings, WorkerSettings};
use crate::core::actions::render_frame::DEFAULT_BAND_COUNT;
use crate::core::actions::render_frame::dispatchers::{DispatchStrategy, Dispatcher};
use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
use crate::core::data::colour::Colour;
use crate::core::data::frame_geometry::{DEFAULT_HALF_EXTENT, FrameGeometry, FrameGeometryError};
use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_ESCAPE_RADIUS_SQUARED, DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::palette::{BandedPalette, PaletteKind};
use crate::core::navigation::NavigationSettings;
use crate::core::util::available_threads::available_threads;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 400;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Geometry(#[from] FrameGeometryError),
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error("pan step must be finite and non-negative, got {0}")]
    InvalidPanStep(f64),
    #[error("zoom step must be finite and greater than one, got {0}")]
    InvalidZoomStep(f64),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

pub type MandelbrotRenderer = FrameRenderer<MandelbrotAlgorithm, BandedPalette>;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_radius_squared: f64,
    pub band_count: NonZeroU32,
    pub threads: NonZeroUsize,
    pub palette: PaletteKind,
    /// Overrides the palette colour of points that never escape.
    pub interior_colour: Option<Colour>,
    pub dispatch: DispatchStrategy,
    pub navigation: NavigationSettings,
    pub half_extent: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            band_count: DEFAULT_BAND_COUNT,
            threads: available_threads(),
            palette: PaletteKind::default(),
            interior_colour: None,
            dispatch: DispatchStrategy::default(),
            navigation: NavigationSettings::default(),
            half_extent: DEFAULT_HALF_EXTENT,
        }
    }
}

impl ViewerConfig {
    /// Checks every value without building anything heavy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry()?;
        self.algorithm()?;

        let pan_step = self.navigation.pan_step;
        if !pan_step.is_finite() || pan_step < 0.0 {
            return Err(ConfigError::InvalidPanStep(pan_step));
        }

        let zoom_step = self.navigation.zoom_step;
        if !zoom_step.is_finite() || zoom_step <= 1.0 {
            return Err(ConfigError::InvalidZoomStep(zoom_step));
        }

        Ok(())
    }

    pub fn geometry(&self) -> Result<FrameGeometry, ConfigError> {
        Ok(FrameGeometry::new(self.width, self.height, self.half_extent)?)
    }

    pub fn algorithm(&self) -> Result<MandelbrotAlgorithm, ConfigError> {
        Ok(MandelbrotAlgorithm::new(self.max_iterations, self.escape_radius_squared)?)
    }

    #[must_use]
    pub fn palette(&self) -> BandedPalette {
        BandedPalette::from_kind(self.palette).with_interior_opt(self.interior_colour)
    }

    pub fn renderer(&self) -> Result<MandelbrotRenderer, ConfigError> {
        Ok(FrameRenderer::new(self.algorithm()?, self.palette(), self.geometry()?))
    }

    pub fn dispatcher(&self) -> Result<Dispatcher, ConfigError> {
        Ok(Dispatcher::new(self.dispatch, self.threads)?)
    }

    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            max_iterations: self.max_iterations,
            palette: self.palette,
            interior: self.interior_colour,
        }
    }

    pub fn worker_settings(&self) -> Result<WorkerSettings, ConfigError> {
        self.validate()?;

        Ok(WorkerSettings {
            geometry: self.geometry()?,
            escape_radius_squared: self.escape_radius_squared,
            band_count: self.band_count,
            dispatcher: self.dispatcher()?,
        })
    }
}
