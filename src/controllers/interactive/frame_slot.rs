use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::controllers::interactive::data::frame_data::CompletedFrame;
use crate::controllers::interactive::events::render_event::{RenderError, RenderEvent};
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::raster::{Raster, RasterError};

type Waker = Box<dyn Fn() + Send + Sync>;

struct SlotState {
    raster: Raster,
    generation: u64,
    render_duration: Duration,
    error: Option<RenderError>,
}

/// Front buffer shared between the render worker and the UI thread.
///
/// The worker copies each finished frame in under the lock; the UI thread
/// reads it back under the same lock. Older generations never overwrite a
/// newer one.
pub struct FrameSlot {
    state: Mutex<SlotState>,
    waker: Option<Waker>,
}

impl FrameSlot {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        Ok(Self {
            state: Mutex::new(SlotState {
                raster: Raster::new(width, height)?,
                generation: 0,
                render_duration: Duration::ZERO,
                error: None,
            }),
            waker: None,
        })
    }

    /// Called after every published event, typically to wake the UI loop.
    #[must_use]
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Box::new(waker));
        self
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Runs `f` on the stored frame if it is newer than `seen`.
    ///
    /// The lock is held while `f` runs, so `f` should only copy.
    pub fn with_frame_newer_than<R>(&self, seen: u64, f: impl FnOnce(CompletedFrame<'_>) -> R) -> Option<R> {
        let state = self.lock();
        if state.generation <= seen {
            return None;
        }

        Some(f(CompletedFrame {
            generation: state.generation,
            raster: &state.raster,
            render_duration: state.render_duration,
        }))
    }

    pub fn take_error(&self) -> Option<RenderError> {
        self.lock().error.take()
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wake(&self) {
        if let Some(waker) = &self.waker {
            waker();
        }
    }
}

impl FramePresenterPort for FrameSlot {
    fn present(&self, event: RenderEvent<'_>) {
        {
            let mut state = self.lock();
            match event {
                RenderEvent::Frame(frame) => {
                    if frame.generation <= state.generation {
                        return;
                    }

                    if let Err(err) = state.raster.copy_from(frame.raster) {
                        log::error!("dropping frame {}: {err}", frame.generation);
                        return;
                    }

                    state.generation = frame.generation;
                    state.render_duration = frame.render_duration;
                    state.error = None;
                }
                RenderEvent::Error(error) => {
                    if error.generation < state.generation {
                        return;
                    }
                    state.error = Some(error);
                }
            }
        }

        self.wake();
    }
}
