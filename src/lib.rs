#[cfg(any(feature = "gui", test))]
mod adapters;
pub mod config;
mod controllers;
mod core;
mod input;
pub mod logging;
mod presenters;
mod storage;

pub use config::{ConfigError, ViewerConfig};
pub use controllers::interactive::{
    CompletedFrame, DisplaySurface, FramePresenterPort, FrameSlot, RenderError, RenderEvent, RenderRequest,
    RenderSettings, RenderWorker, RenderWorkerError, SessionControl, ViewerSession, WorkerSettings,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::snapshot::{SnapshotController, SnapshotError};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, GenerationToken, NeverCancel};
pub use crate::core::actions::render_frame::dispatchers::pool::PoolDispatcher;
pub use crate::core::actions::render_frame::dispatchers::scoped_threads::ScopedThreadDispatcher;
pub use crate::core::actions::render_frame::dispatchers::{DispatchStrategy, Dispatcher};
pub use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
pub use crate::core::actions::render_frame::ports::{BandDispatcher, ColourMap, FractalAlgorithm};
pub use crate::core::actions::render_frame::{DEFAULT_BAND_COUNT, RenderFrameError, render_frame};
pub use crate::core::data::band::Band;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_geometry::{DEFAULT_HALF_EXTENT, FrameGeometry, FrameGeometryError};
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_ESCAPE_RADIUS_SQUARED, DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::palette::{BandedPalette, PaletteKind};
pub use crate::core::navigation::{InputSnapshot, NavigationReport, NavigationSettings, apply_input};
pub use crate::core::util::partition_bands::partition_bands;
pub use input::cli::{SnapshotCli, ViewerArgs, ViewerCli};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::{EXIT_DISPLAY_INIT, EXIT_RUNTIME, EXIT_USAGE, RunViewerCommand, RunViewerError};
#[cfg(feature = "gui")]
pub use presenters::pixels::PixelsPresenterFactory;
