use crate::core::actions::cancellation::Cancelled;
use crate::core::data::band::Band;

/// Runs one fill job per band and returns once every job has finished.
///
/// Each job owns a disjoint slice of raster rows. A dispatcher stops handing
/// out work after the first job reports [`Cancelled`].
pub trait BandDispatcher: Send + Sync {
    fn dispatch<F>(&self, jobs: Vec<(Band, &mut [u32])>, fill: &F) -> Result<(), Cancelled>
    where
        F: Fn(Band, &mut [u32]) -> Result<(), Cancelled> + Sync;

    fn display_name(&self) -> &str;
}
