use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::core::navigation::InputSnapshot;

/// Folds winit events into one [`InputSnapshot`] per frame.
///
/// Arrow keys are tracked as held state. Quit, escape, the debug and reset
/// keys and scroll notches are latched until the next snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyInputState {
    up_held: bool,
    down_held: bool,
    left_held: bool,
    right_held: bool,
    quit_pending: bool,
    escape_pending: bool,
    debug_pending: bool,
    reset_pending: bool,
    scroll_notches: i32,
    pointer: Option<(f64, f64)>,
}

impl KeyInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::Escape if pressed => self.escape_pending = true,
            KeyCode::KeyP if pressed && !repeat => self.debug_pending = true,
            KeyCode::KeyR if pressed && !repeat => self.reset_pending = true,
            _ => {}
        }
    }

    /// Counts one notch per wheel event; only the sign of the delta matters.
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if amount > 0.0 {
            self.scroll_notches = self.scroll_notches.saturating_add(1);
        } else if amount < 0.0 {
            self.scroll_notches = self.scroll_notches.saturating_sub(1);
        }
    }

    /// `position` is already in raster pixels; `None` means the cursor left
    /// the raster.
    pub fn handle_pointer(&mut self, position: Option<(f64, f64)>) {
        self.pointer = position;
    }

    pub fn request_quit(&mut self) {
        self.quit_pending = true;
    }

    /// Returns this frame's input and clears the latched events.
    ///
    /// While egui owns the keyboard the navigation keys are suppressed, but
    /// quit requests still go through.
    pub fn snapshot(&mut self, keyboard_captured: bool) -> InputSnapshot {
        let scroll = self.scroll_notches;

        let snapshot = if keyboard_captured {
            InputSnapshot {
                quit: self.quit_pending,
                scroll,
                pointer: self.pointer,
                ..InputSnapshot::default()
            }
        } else {
            InputSnapshot {
                quit: self.quit_pending,
                escape: self.escape_pending,
                up: self.up_held,
                down: self.down_held,
                left: self.left_held,
                right: self.right_held,
                debug_print: self.debug_pending,
                reset: self.reset_pending,
                scroll,
                pointer: self.pointer,
            }
        };

        self.quit_pending = false;
        self.escape_pending = false;
        self.debug_pending = false;
        self.reset_pending = false;
        self.scroll_notches = 0;
        snapshot
    }

    /// True while a held key should keep the view moving.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.up_held || self.down_held || self.left_held || self.right_held
    }

    /// Drops held keys, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.up_held = false;
        self.down_held = false;
        self.left_held = false;
        self.right_held = false;
    }
}

#[cfg(test)]
mod tests {
    use super::KeyInputState;
    use crate::core::navigation::InputSnapshot;
    use winit::dpi::PhysicalPosition;
    use winit::event::{ElementState, MouseScrollDelta};
    use winit::keyboard::KeyCode;

    #[test]
    fn arrows_are_held_until_released() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed, false);
        input.handle_key_event(KeyCode::ArrowRight, ElementState::Pressed, false);

        let first = input.snapshot(false);
        let second = input.snapshot(false);
        assert!(first.up && first.right);
        assert!(second.up && second.right);
        assert!(input.is_panning());

        input.handle_key_event(KeyCode::ArrowUp, ElementState::Released, false);
        input.handle_key_event(KeyCode::ArrowRight, ElementState::Released, false);

        let released = input.snapshot(false);
        assert!(!released.up && !released.right);
        assert!(!input.is_panning());
    }

    #[test]
    fn debug_key_is_latched_once_and_ignores_repeats() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyP, ElementState::Pressed, false);
        input.handle_key_event(KeyCode::KeyP, ElementState::Pressed, true);

        assert!(input.snapshot(false).debug_print);
        assert!(!input.snapshot(false).debug_print);
    }

    #[test]
    fn escape_and_quit_are_reported() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::Escape, ElementState::Pressed, false);
        assert!(input.snapshot(false).escape);

        input.request_quit();
        assert!(input.snapshot(false).quit);
        assert!(!input.snapshot(false).wants_exit());
    }

    #[test]
    fn scroll_counts_one_notch_per_event() {
        let mut input = KeyInputState::default();

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(input.snapshot(false).scroll, 1);

        input.handle_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -12.0)));
        assert_eq!(input.snapshot(false).scroll, -1);
        assert_eq!(input.snapshot(false).scroll, 0);
    }

    #[test]
    fn scroll_notches_between_frames_accumulate() {
        let mut input = KeyInputState::default();

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 3.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 0.5));
        assert_eq!(input.snapshot(false).scroll, 3);

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 0.0));
        assert_eq!(input.snapshot(false).scroll, -1);
    }

    #[test]
    fn pointer_persists_between_snapshots() {
        let mut input = KeyInputState::default();

        input.handle_pointer(Some((12.0, 34.0)));
        assert_eq!(input.snapshot(false).pointer, Some((12.0, 34.0)));
        assert_eq!(input.snapshot(false).pointer, Some((12.0, 34.0)));

        input.handle_pointer(None);
        assert_eq!(input.snapshot(false).pointer, None);
    }

    #[test]
    fn captured_keyboard_suppresses_navigation_keys() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::ArrowLeft, ElementState::Pressed, false);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed, false);

        assert_eq!(input.snapshot(true), InputSnapshot::default());

        let after = input.snapshot(false);
        assert!(after.left);
        assert!(!after.reset);
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut input = KeyInputState::default();
        input.handle_key_event(KeyCode::ArrowDown, ElementState::Pressed, false);

        input.release_all();

        assert!(!input.snapshot(false).down);
    }
}
