//! Interfaces between the render worker, the UI loop and the display.

pub mod display;
pub mod presenter;

pub use display::DisplaySurface;
pub use presenter::FramePresenterPort;
