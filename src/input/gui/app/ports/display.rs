use egui::Context as EguiContext;

use crate::controllers::interactive::ports::display::DisplaySurface;

/// Window-backed display that can also draw the egui panel and map cursor
/// positions back into the raster.
pub trait GuiDisplayPort: DisplaySurface {
    /// Queues an egui frame to be composited on the next present.
    fn set_overlay(&mut self, ctx: &EguiContext, output: egui::FullOutput);

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Converts a physical window position to raster pixel coordinates, or
    /// `None` when it falls outside the raster.
    fn window_to_raster(&self, x: f64, y: f64) -> Option<(f64, f64)>;
}
