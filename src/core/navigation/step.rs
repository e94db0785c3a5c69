use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::controls::InputSnapshot;

/// Pan distance per frame for a held arrow key, in world units at zoom 1.
pub const DEFAULT_PAN_STEP: f64 = 0.05;

/// Zoom multiplier per scroll notch; ten notches double the zoom.
pub fn default_zoom_step() -> f64 {
    2f64.powf(0.1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    pub pan_step: f64,
    pub zoom_step: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            pan_step: DEFAULT_PAN_STEP,
            zoom_step: default_zoom_step(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationReport {
    pub quit: bool,
    pub view_changed: bool,
    pub debug_requested: bool,
}

/// Applies one frame of input to `viewport`.
///
/// Nothing changes once an exit is requested. Each scroll notch zooms by one
/// step around the pointer, or around the screen centre when the pointer is
/// outside the window.
pub fn apply_input(
    viewport: &mut Viewport,
    geometry: &FrameGeometry,
    input: &InputSnapshot,
    settings: &NavigationSettings,
) -> NavigationReport {
    let mut report = NavigationReport {
        debug_requested: input.debug_print,
        ..NavigationReport::default()
    };

    if input.wants_exit() {
        report.quit = true;
        return report;
    }

    if input.reset {
        report.view_changed = *viewport != Viewport::default();
        *viewport = Viewport::default();
    }

    let dx = axis_from_pair(input.right, input.left) * settings.pan_step;
    let dy = axis_from_pair(input.down, input.up) * settings.pan_step;
    if dx != 0.0 || dy != 0.0 {
        match viewport.pan_by(dx, dy) {
            Ok(()) => report.view_changed = true,
            Err(err) => log::warn!("ignoring pan step: {err}"),
        }
    }

    if input.scroll != 0 {
        let factor = settings.zoom_step.powi(input.scroll);
        let (nx, ny) = input
            .pointer
            .map_or((0.0, 0.0), |(x, y)| geometry.pixel_to_normalized(x, y));

        match viewport.zoom_around_point(geometry, nx, ny, factor) {
            Ok(()) => report.view_changed = true,
            Err(err) => log::warn!("ignoring zoom step: {err}"),
        }
    }

    if report.view_changed {
        log::trace!(
            "viewport offset=({}, {}) zoom={}",
            viewport.offset_x(),
            viewport.offset_y(),
            viewport.zoom()
        );
    }

    report
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_geometry::DEFAULT_HALF_EXTENT;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn geometry() -> FrameGeometry {
        FrameGeometry::new(500, 400, DEFAULT_HALF_EXTENT).unwrap()
    }

    fn step(viewport: &mut Viewport, input: InputSnapshot) -> NavigationReport {
        apply_input(viewport, &geometry(), &input, &NavigationSettings::default())
    }

    #[test]
    fn idle_input_changes_nothing() {
        let mut viewport = Viewport::new(0.2, -0.3, 4.0).unwrap();
        let original = viewport;

        let report = step(&mut viewport, InputSnapshot::default());

        assert_eq!(report, NavigationReport::default());
        assert_eq!(viewport, original);
    }

    #[test]
    fn right_arrow_pans_towards_positive_real() {
        let mut viewport = Viewport::default();

        let report = step(
            &mut viewport,
            InputSnapshot {
                right: true,
                ..InputSnapshot::default()
            },
        );

        assert!(report.view_changed);
        assert_approx_eq(viewport.offset_x(), DEFAULT_PAN_STEP);
        assert_approx_eq(viewport.offset_y(), 0.0);
    }

    #[test]
    fn up_arrow_moves_view_towards_top_of_screen() {
        let mut viewport = Viewport::default();

        step(
            &mut viewport,
            InputSnapshot {
                up: true,
                ..InputSnapshot::default()
            },
        );

        assert_approx_eq(viewport.offset_y(), -DEFAULT_PAN_STEP);
    }

    #[test]
    fn opposite_arrows_cancel_out() {
        let mut viewport = Viewport::default();

        let report = step(
            &mut viewport,
            InputSnapshot {
                left: true,
                right: true,
                ..InputSnapshot::default()
            },
        );

        assert!(!report.view_changed);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn pan_step_shrinks_with_zoom() {
        let mut viewport = Viewport::new(0.0, 0.0, 8.0).unwrap();

        step(
            &mut viewport,
            InputSnapshot {
                left: true,
                ..InputSnapshot::default()
            },
        );

        assert_approx_eq(viewport.offset_x(), -DEFAULT_PAN_STEP / 8.0);
    }

    #[test]
    fn ten_scroll_steps_double_zoom() {
        let mut viewport = Viewport::default();
        let scroll_up = InputSnapshot {
            scroll: 1,
            pointer: Some((250.0, 200.0)),
            ..InputSnapshot::default()
        };

        for _ in 0..10 {
            step(&mut viewport, scroll_up);
        }

        assert!((viewport.zoom() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_down_undoes_scroll_up() {
        let mut viewport = Viewport::new(-0.5, 0.1, 3.0).unwrap();
        let original = viewport;
        let pointer = Some((120.0, 330.0));

        step(
            &mut viewport,
            InputSnapshot {
                scroll: 1,
                pointer,
                ..InputSnapshot::default()
            },
        );
        step(
            &mut viewport,
            InputSnapshot {
                scroll: -1,
                pointer,
                ..InputSnapshot::default()
            },
        );

        assert!((viewport.zoom() - original.zoom()).abs() < 1e-9);
        assert!((viewport.offset_x() - original.offset_x()).abs() < 1e-9);
        assert!((viewport.offset_y() - original.offset_y()).abs() < 1e-9);
    }

    #[test]
    fn several_notches_in_one_frame_zoom_several_steps() {
        let mut viewport = Viewport::default();
        let pointer = Some((250.0, 200.0));

        step(
            &mut viewport,
            InputSnapshot {
                scroll: 10,
                pointer,
                ..InputSnapshot::default()
            },
        );
        assert!((viewport.zoom() - 2.0).abs() < 1e-9);

        step(
            &mut viewport,
            InputSnapshot {
                scroll: -3,
                pointer,
                ..InputSnapshot::default()
            },
        );
        assert!((viewport.zoom() - 2f64.powf(0.7)).abs() < 1e-9);
    }

    #[test]
    fn scroll_keeps_point_under_pointer_fixed() {
        let geometry = geometry();
        let mut viewport = Viewport::new(-0.7, 0.2, 1.7).unwrap();
        let (nx, ny) = geometry.pixel_to_normalized(400.0, 50.0);
        let before = viewport.screen_to_world(&geometry, nx, ny);

        step(
            &mut viewport,
            InputSnapshot {
                scroll: 1,
                pointer: Some((400.0, 50.0)),
                ..InputSnapshot::default()
            },
        );

        let after = viewport.screen_to_world(&geometry, nx, ny);
        assert!((after.real - before.real).abs() < 1e-9);
        assert!((after.imag - before.imag).abs() < 1e-9);
    }

    #[test]
    fn scroll_without_pointer_zooms_around_centre() {
        let mut viewport = Viewport::new(0.3, 0.4, 1.0).unwrap();

        step(
            &mut viewport,
            InputSnapshot {
                scroll: 1,
                ..InputSnapshot::default()
            },
        );

        assert_eq!(viewport.offset_x(), 0.3);
        assert_eq!(viewport.offset_y(), 0.4);
    }

    #[test]
    fn zoom_overflow_is_ignored() {
        let mut viewport = Viewport::new(0.0, 0.0, f64::MAX).unwrap();

        let report = step(
            &mut viewport,
            InputSnapshot {
                scroll: 1,
                ..InputSnapshot::default()
            },
        );

        assert!(!report.view_changed);
        assert_eq!(viewport.zoom(), f64::MAX);
    }

    #[test]
    fn reset_restores_default_view() {
        let mut viewport = Viewport::new(1.0, 1.0, 64.0).unwrap();

        let report = step(
            &mut viewport,
            InputSnapshot {
                reset: true,
                ..InputSnapshot::default()
            },
        );

        assert!(report.view_changed);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn exit_short_circuits_other_input() {
        let mut viewport = Viewport::default();

        let report = step(
            &mut viewport,
            InputSnapshot {
                escape: true,
                right: true,
                scroll: 1,
                ..InputSnapshot::default()
            },
        );

        assert!(report.quit);
        assert!(!report.view_changed);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn debug_key_is_reported() {
        let mut viewport = Viewport::default();

        let report = step(
            &mut viewport,
            InputSnapshot {
                debug_print: true,
                ..InputSnapshot::default()
            },
        );

        assert!(report.debug_requested);
        assert!(!report.view_changed);
    }
}
