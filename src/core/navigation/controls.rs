/// Input state sampled once per frame.
///
/// Arrow keys are level-triggered (held), everything else is edge-triggered
/// and only set on the frame the event arrived. `scroll` counts wheel
/// notches since the last frame, positive for up. `pointer` is in raster
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub quit: bool,
    pub escape: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub debug_print: bool,
    pub reset: bool,
    pub scroll: i32,
    pub pointer: Option<(f64, f64)>,
}

impl InputSnapshot {
    #[must_use]
    pub fn wants_exit(&self) -> bool {
        self.quit || self.escape
    }
}
