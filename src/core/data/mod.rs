pub mod band;
pub mod colour;
pub mod complex;
pub mod frame_geometry;
pub mod raster;
pub mod viewport;
