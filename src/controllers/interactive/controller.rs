use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use thiserror::Error;

use crate::controllers::interactive::data::frame_data::CompletedFrame;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render_event::{RenderError, RenderEvent};
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::render_frame::dispatchers::Dispatcher;
use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::raster::{Raster, RasterError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::palette::BandedPalette;

#[derive(Debug, Error)]
pub enum RenderWorkerError {
    #[error("failed to allocate render target: {0}")]
    Raster(#[from] RasterError),
    #[error("failed to spawn render worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Fixed parameters of the worker, chosen once at startup.
#[derive(Debug)]
pub struct WorkerSettings {
    pub geometry: FrameGeometry,
    pub escape_radius_squared: f64,
    pub band_count: NonZeroU32,
    pub dispatcher: Dispatcher,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn FramePresenterPort>,
}

/// Background thread that renders the most recent [`RenderRequest`].
///
/// Submitting a request bumps the generation, which cancels any render in
/// flight. Only frames whose generation is still current when they finish
/// are published; cancelled and stale work is dropped without an event.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(
        settings: WorkerSettings,
        presenter_port: Arc<dyn FramePresenterPort>,
    ) -> Result<Self, RenderWorkerError> {
        let raster = Raster::new(settings.geometry.width(), settings.geometry.height())?;

        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("render-worker".into())
            .spawn(move || {
                Self::worker_loop(&worker_shared, settings, raster);
            })?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.last_completed_generation.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState, settings: WorkerSettings, mut raster: Raster) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared.wake.wait(guard).unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = GenerationToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = Self::render_request(&settings, &request, &mut raster, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(()) => RenderEvent::Frame(CompletedFrame {
                    generation: job_generation,
                    raster: &raster,
                    render_duration,
                }),
                Err(RenderOutcome::Cancelled) => {
                    log::trace!(
                        "render {} cancelled, latest is {}",
                        cancel_token.generation(),
                        shared.generation.load(Ordering::Relaxed)
                    );
                    continue;
                }
                Err(RenderOutcome::Error(message)) => RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message,
                }),
            };

            if cancel_token.is_cancelled() {
                log::trace!("render {} finished stale, dropping", cancel_token.generation());
                continue;
            }

            if let RenderEvent::Error(error) = &event {
                log::warn!("render {} failed: {}", error.generation, error.message);
            } else {
                log::debug!("render {job_generation} finished in {render_duration:?}");
            }

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        settings: &WorkerSettings,
        request: &RenderRequest,
        raster: &mut Raster,
        cancel: &C,
    ) -> Result<(), RenderOutcome> {
        let algorithm = MandelbrotAlgorithm::new(request.settings.max_iterations, settings.escape_radius_squared)
            .map_err(|err| RenderOutcome::Error(err.to_string()))?;
        let palette = BandedPalette::from_kind(request.settings.palette).with_interior_opt(request.settings.interior);
        let renderer = FrameRenderer::new(algorithm, palette, settings.geometry);

        render_frame(
            &renderer,
            &request.viewport,
            raster,
            settings.band_count,
            &settings.dispatcher,
            cancel,
        )
        .map_err(|err| match err {
            RenderFrameError::Cancelled(_) => RenderOutcome::Cancelled,
            RenderFrameError::Raster(err) => RenderOutcome::Error(err.to_string()),
        })
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
