use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::config::{ConfigError, ViewerConfig};
use crate::controllers::interactive::{
    FramePresenterPort, FrameSlot, RenderWorker, RenderWorkerError, SessionControl, ViewerSession,
};
use crate::core::data::raster::RasterError;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::display::GuiDisplayPort;
use crate::input::gui::commands::ports::display_factory::DisplayFactoryPort;
use crate::input::gui::events::GuiEvent;

/// Process exit code when the window or display surface cannot be created.
pub const EXIT_DISPLAY_INIT: u8 = 2;
/// Process exit code for an invalid command line or configuration.
pub const EXIT_USAGE: u8 = 64;
/// Process exit code for a failure after the first frame.
pub const EXIT_RUNTIME: u8 = 1;

#[derive(Debug, Error)]
pub enum RunViewerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create event loop: {0}")]
    EventLoopInit(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to initialize display: {0}")]
    Display(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to allocate frame slot: {0}")]
    FrameSlot(#[from] RasterError),
    #[error(transparent)]
    Worker(#[from] RenderWorkerError),
    #[error("event loop failed: {0}")]
    EventLoop(#[source] EventLoopError),
    #[error("failed to present frame: {0}")]
    Present(String),
}

impl RunViewerError {
    /// Whether the window, display or render machinery failed to come up.
    /// Configuration errors are rejected before any of it is touched.
    #[must_use]
    pub fn is_initialization_failure(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::EventLoop(_) | Self::Present(_))
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_USAGE,
            err if err.is_initialization_failure() => EXIT_DISPLAY_INIT,
            _ => EXIT_RUNTIME,
        }
    }
}

/// Opens the viewer window and runs the event loop until the user quits.
pub struct RunViewerCommand<F, D>
where
    D: GuiDisplayPort,
    F: DisplayFactoryPort<D>,
{
    display_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> D>,
}

impl<F, D> RunViewerCommand<F, D>
where
    D: GuiDisplayPort,
    F: DisplayFactoryPort<D>,
{
    pub fn new(display_factory: F, config: ViewerConfig) -> Self {
        Self {
            display_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), RunViewerError> {
        let geometry = self.config.geometry()?;
        let worker_settings = self.config.worker_settings()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .map_err(RunViewerError::EventLoopInit)?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Viewer")
                .with_inner_size(PhysicalSize::new(geometry.width(), geometry.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let display = self
            .display_factory
            .build(window, geometry.width(), geometry.height())
            .map_err(|err| RunViewerError::Display(Box::new(err)))?;

        let proxy = Mutex::new(event_loop.create_proxy());
        let slot = Arc::new(FrameSlot::new(geometry.width(), geometry.height())?.with_waker(move || {
            if let Ok(proxy) = proxy.lock() {
                let _ = proxy.send_event(GuiEvent::Wake);
            }
        }));
        let worker = RenderWorker::new(worker_settings, Arc::clone(&slot) as Arc<dyn FramePresenterPort>)?;

        let session = ViewerSession::new(
            geometry,
            self.config.navigation,
            self.config.render_settings(),
            worker,
            slot,
            display,
        );
        let mut app = GuiApp::new(window, &event_loop, session);
        let mut redraw_pending = true;
        let mut failure = None;

        log::info!(
            "viewer started: {}x{}, {} iterations, {} bands, {} threads",
            geometry.width(),
            geometry.height(),
            self.config.max_iterations,
            self.config.band_count,
            self.config.threads
        );

        event_loop
            .run(|event, elwt| match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    redraw_pending = true;
                }
                Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                    if app.handle_window_event(window, event) {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            match app.frame(window) {
                                Ok(SessionControl::Continue) => {}
                                Ok(SessionControl::Exit) => {
                                    app.shutdown();
                                    elwt.exit();
                                }
                                Err(err) => {
                                    log::error!("present failed: {err}");
                                    failure = Some(RunViewerError::Present(err.to_string()));
                                    app.shutdown();
                                    elwt.exit();
                                }
                            }
                        }
                        WindowEvent::Resized(size) => {
                            if let Err(err) = app.resize(size.width, size.height) {
                                log::warn!("surface resize failed: {err}");
                            }
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            if let Err(err) = app.resize(size.width, size.height) {
                                log::warn!("surface resize failed: {err}");
                            }
                            redraw_pending = true;
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending || app.is_animating() {
                        window.request_redraw();
                    }
                }
                _ => {}
            })
            .map_err(RunViewerError::EventLoop)?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
