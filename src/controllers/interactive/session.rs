use std::sync::Arc;
use std::time::Duration;

use crate::controllers::interactive::controller::RenderWorker;
use crate::controllers::interactive::data::render_request::{RenderRequest, RenderSettings};
use crate::controllers::interactive::frame_slot::FrameSlot;
use crate::controllers::interactive::ports::display::DisplaySurface;
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::{InputSnapshot, NavigationSettings, apply_input};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Exit,
}

/// UI-thread side of the viewer: owns the viewport, turns input into render
/// requests and pushes finished frames to the display.
pub struct ViewerSession<D: DisplaySurface> {
    geometry: FrameGeometry,
    navigation: NavigationSettings,
    viewport: Viewport,
    settings: RenderSettings,
    worker: RenderWorker,
    slot: Arc<FrameSlot>,
    display: D,
    last_submitted: Option<RenderRequest>,
    latest_submitted_generation: u64,
    last_presented_generation: u64,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
    last_pointer: Option<(f64, f64)>,
}

impl<D: DisplaySurface> ViewerSession<D> {
    /// `slot` must be the presenter port `worker` publishes to.
    pub fn new(
        geometry: FrameGeometry,
        navigation: NavigationSettings,
        settings: RenderSettings,
        worker: RenderWorker,
        slot: Arc<FrameSlot>,
        display: D,
    ) -> Self {
        Self {
            geometry,
            navigation,
            viewport: Viewport::default(),
            settings,
            worker,
            slot,
            display,
            last_submitted: None,
            latest_submitted_generation: 0,
            last_presented_generation: 0,
            last_render_duration: None,
            last_error_message: None,
            last_pointer: None,
        }
    }

    pub fn handle_input(&mut self, input: &InputSnapshot) -> SessionControl {
        let report = apply_input(&mut self.viewport, &self.geometry, input, &self.navigation);

        if report.debug_requested {
            self.log_debug_state(input.pointer);
        }
        if input.pointer.is_some() {
            self.last_pointer = input.pointer;
        }

        if report.quit {
            SessionControl::Exit
        } else {
            SessionControl::Continue
        }
    }

    /// Submits the current view unless it matches the last submission.
    pub fn submit_if_needed(&mut self) -> Option<u64> {
        let request = RenderRequest {
            viewport: self.viewport,
            settings: self.settings,
        };

        if self.last_submitted == Some(request) {
            return None;
        }

        let generation = self.worker.submit_request(request);
        self.last_submitted = Some(request);
        self.latest_submitted_generation = generation;
        self.last_error_message = None;
        Some(generation)
    }

    /// Copies the newest finished frame to the display and presents it.
    ///
    /// Returns `Ok(false)` without touching the display when nothing new has
    /// arrived.
    pub fn present(&mut self) -> Result<bool, D::Error> {
        if let Some(error) = self.slot.take_error() {
            self.last_error_message = Some(error.message);
        }

        let display = &mut self.display;
        let updated = self
            .slot
            .with_frame_newer_than(self.last_presented_generation, |frame| {
                display
                    .update_surface(frame.raster)
                    .map(|()| (frame.generation, frame.render_duration))
            });

        let Some(updated) = updated else {
            return Ok(false);
        };

        let (generation, render_duration) = updated?;
        self.last_presented_generation = generation;
        self.last_render_duration = Some(render_duration);
        self.display.present()?;

        Ok(true)
    }

    /// Presents the display as-is, for redraws that only change the overlay.
    pub fn redraw(&mut self) -> Result<(), D::Error> {
        self.display.present()
    }

    pub fn shutdown(&mut self) {
        self.worker.shutdown();
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default();
    }

    #[must_use]
    pub fn latest_submitted_generation(&self) -> u64 {
        self.latest_submitted_generation
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn log_debug_state(&self, pointer: Option<(f64, f64)>) {
        let Some((x, y)) = pointer else {
            log::info!(
                "offset=({}, {}) zoom={}",
                self.viewport.offset_x(),
                self.viewport.offset_y(),
                self.viewport.zoom()
            );
            return;
        };

        let (nx, ny) = self.geometry.pixel_to_normalized(x, y);
        let world = self.viewport.screen_to_world(&self.geometry, nx, ny);
        let (dx, dy) = self.last_pointer.map_or((0.0, 0.0), |(px, py)| (x - px, y - py));
        log::info!(
            "offset=({}, {}) zoom={} pointer=({x}, {y}) delta=({dx}, {dy}) world=({}, {})",
            self.viewport.offset_x(),
            self.viewport.offset_y(),
            self.viewport.zoom(),
            world.real,
            world.imag
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::controller::WorkerSettings;
    use crate::controllers::interactive::ports::presenter::FramePresenterPort;
    use crate::core::actions::render_frame::dispatchers::{DispatchStrategy, Dispatcher};
    use crate::core::data::raster::Raster;
    use crate::core::fractals::mandelbrot::palette::PaletteKind;
    use std::num::{NonZeroU32, NonZeroUsize};
    use std::time::Instant;

    #[derive(Debug, thiserror::Error)]
    #[error("display failed")]
    struct MockDisplayError;

    #[derive(Default)]
    struct MockDisplay {
        surfaces: Vec<Vec<u32>>,
        presents: usize,
        fail: bool,
    }

    impl DisplaySurface for MockDisplay {
        type Error = MockDisplayError;

        fn update_surface(&mut self, raster: &Raster) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockDisplayError);
            }
            self.surfaces.push(raster.pixels().to_vec());
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.presents += 1;
            Ok(())
        }
    }

    fn session(display: MockDisplay) -> ViewerSession<MockDisplay> {
        let geometry = FrameGeometry::new(10, 8, 2.0).unwrap();
        let slot = Arc::new(FrameSlot::new(10, 8).unwrap());
        let worker = RenderWorker::new(
            WorkerSettings {
                geometry,
                escape_radius_squared: 10.0,
                band_count: NonZeroU32::new(4).unwrap(),
                dispatcher: Dispatcher::new(DispatchStrategy::Pool, NonZeroUsize::new(2).unwrap()).unwrap(),
            },
            Arc::clone(&slot) as Arc<dyn FramePresenterPort>,
        )
        .unwrap();

        ViewerSession::new(
            geometry,
            NavigationSettings::default(),
            RenderSettings {
                max_iterations: 25,
                palette: PaletteKind::Banded,
                interior: None,
            },
            worker,
            slot,
            display,
        )
    }

    fn present_within(session: &mut ViewerSession<MockDisplay>, timeout: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if session.present().unwrap() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }

    #[test]
    fn identical_requests_are_submitted_once() {
        let mut session = session(MockDisplay::default());

        assert_eq!(session.submit_if_needed(), Some(1));
        assert_eq!(session.submit_if_needed(), None);

        session.handle_input(&InputSnapshot {
            right: true,
            ..InputSnapshot::default()
        });
        assert_eq!(session.submit_if_needed(), Some(2));
        session.shutdown();
    }

    #[test]
    fn settings_change_triggers_submission() {
        let mut session = session(MockDisplay::default());
        session.submit_if_needed();

        session.settings_mut().palette = PaletteKind::Classic;

        assert_eq!(session.submit_if_needed(), Some(2));
        session.shutdown();
    }

    #[test]
    fn finished_frame_reaches_display_once() {
        let mut session = session(MockDisplay::default());
        let generation = session.submit_if_needed().unwrap();

        assert!(present_within(&mut session, Duration::from_secs(2)));
        assert_eq!(session.last_presented_generation(), generation);
        assert!(session.last_render_duration().is_some());
        assert_eq!(session.display_mut().surfaces.len(), 1);
        assert_eq!(session.display_mut().surfaces[0].len(), 80);
        assert_eq!(session.display_mut().presents, 1);

        assert!(!session.present().unwrap());
        assert_eq!(session.display_mut().presents, 1);
        session.shutdown();
    }

    #[test]
    fn nothing_is_presented_before_a_frame_exists() {
        let mut session = session(MockDisplay::default());

        assert!(!session.present().unwrap());
        assert_eq!(session.display_mut().presents, 0);
        session.shutdown();
    }

    #[test]
    fn display_error_is_propagated() {
        let mut session = session(MockDisplay {
            fail: true,
            ..MockDisplay::default()
        });
        session.submit_if_needed();

        let start = Instant::now();
        let mut result = Ok(false);
        while start.elapsed() < Duration::from_secs(2) {
            result = session.present();
            if !matches!(result, Ok(false)) {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(result.is_err());
        session.shutdown();
    }

    #[test]
    fn worker_errors_surface_in_session() {
        let mut session = session(MockDisplay::default());
        session.settings_mut().max_iterations = 0;
        session.submit_if_needed();

        let start = Instant::now();
        while session.last_error_message().is_none() && start.elapsed() < Duration::from_secs(2) {
            session.present().unwrap();
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(session.last_error_message().is_some());
        session.shutdown();
    }

    #[test]
    fn escape_exits_and_scroll_zooms() {
        let mut session = session(MockDisplay::default());

        let control = session.handle_input(&InputSnapshot {
            scroll: 1,
            pointer: Some((5.0, 4.0)),
            ..InputSnapshot::default()
        });
        assert_eq!(control, SessionControl::Continue);
        assert!(session.viewport().zoom() > 1.0);

        let control = session.handle_input(&InputSnapshot {
            escape: true,
            ..InputSnapshot::default()
        });
        assert_eq!(control, SessionControl::Exit);
        session.shutdown();
    }

    #[test]
    fn reset_view_restores_default() {
        let mut session = session(MockDisplay::default());
        session.handle_input(&InputSnapshot {
            down: true,
            ..InputSnapshot::default()
        });

        session.reset_view();

        assert_eq!(*session.viewport(), Viewport::default());
        session.shutdown();
    }
}
