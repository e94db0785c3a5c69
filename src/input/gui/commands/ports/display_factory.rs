use winit::window::Window;

use crate::input::gui::app::ports::display::GuiDisplayPort;

pub trait DisplayFactoryPort<D: GuiDisplayPort> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a display whose buffer is `width` x `height` raster pixels.
    fn build(&self, window: &'static Window, width: u32, height: u32) -> Result<D, Self::Error>;
}
