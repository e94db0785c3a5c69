use crate::core::data::colour::Colour;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::palette::PaletteKind;

/// Knobs the user can change while the viewer is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub max_iterations: u32,
    pub palette: PaletteKind,
    /// Colour for points that never escape; `None` runs `0` through the
    /// palette like any other count.
    pub interior: Option<Colour>,
}

/// Immutable snapshot of everything needed to render one frame.
///
/// `PartialEq` lets the UI skip submitting a request identical to the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub settings: RenderSettings,
}
