use winit::window::Window;

use crate::input::gui::commands::ports::display_factory::DisplayFactoryPort;
use crate::presenters::pixels::presenter::{PixelsPresenter, PixelsPresenterError};

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DisplayFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    type Error = PixelsPresenterError;

    fn build(&self, window: &'static Window, width: u32, height: u32) -> Result<PixelsPresenter, Self::Error> {
        PixelsPresenter::new(window, width, height)
    }
}
