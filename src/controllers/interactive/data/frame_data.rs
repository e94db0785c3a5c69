use std::time::Duration;

use crate::core::data::raster::Raster;

/// A fully rendered frame, borrowed from the worker for the duration of
/// the hand-off.
#[derive(Debug, Clone, Copy)]
pub struct CompletedFrame<'a> {
    pub generation: u64,
    pub raster: &'a Raster,
    pub render_duration: Duration,
}
