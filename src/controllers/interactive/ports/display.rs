use crate::core::data::raster::Raster;

/// The window surface a finished raster is shown on.
pub trait DisplaySurface {
    type Error: std::error::Error;

    fn update_surface(&mut self, raster: &Raster) -> Result<(), Self::Error>;

    fn present(&mut self) -> Result<(), Self::Error>;
}
