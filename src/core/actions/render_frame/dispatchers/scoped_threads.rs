use std::panic;
use std::thread;

use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::render_frame::ports::band_dispatcher::BandDispatcher;
use crate::core::data::band::Band;

/// Spawns one scoped thread per band for every frame and joins them all.
///
/// Kept for comparison with [`super::pool::PoolDispatcher`]; it pays the
/// thread start-up cost on each frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScopedThreadDispatcher;

impl BandDispatcher for ScopedThreadDispatcher {
    fn dispatch<F>(&self, jobs: Vec<(Band, &mut [u32])>, fill: &F) -> Result<(), Cancelled>
    where
        F: Fn(Band, &mut [u32]) -> Result<(), Cancelled> + Sync,
    {
        thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .into_iter()
                .map(|(band, rows)| scope.spawn(move || fill(band, rows)))
                .collect();

            let results: Vec<Result<(), Cancelled>> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                .collect();

            results.into_iter().collect()
        })
    }

    fn display_name(&self) -> &str {
        "Thread per band"
    }
}
