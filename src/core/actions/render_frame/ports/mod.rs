pub mod band_dispatcher;
pub mod colour_map;
pub mod fractal_algorithm;

pub use band_dispatcher::BandDispatcher;
pub use colour_map::ColourMap;
pub use fractal_algorithm::FractalAlgorithm;
