use std::num::NonZeroUsize;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::render_frame::ports::band_dispatcher::BandDispatcher;
use crate::core::data::band::Band;

/// Fills bands on a fixed-size rayon pool that lives as long as the
/// dispatcher, so frames reuse the same worker threads.
#[derive(Debug)]
pub struct PoolDispatcher {
    pool: ThreadPool,
}

impl PoolDispatcher {
    pub fn new(threads: NonZeroUsize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .thread_name(|index| format!("band-worker-{index}"))
            .build()?;

        log::debug!("band worker pool started with {} threads", pool.current_num_threads());

        Ok(Self { pool })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl BandDispatcher for PoolDispatcher {
    fn dispatch<F>(&self, jobs: Vec<(Band, &mut [u32])>, fill: &F) -> Result<(), Cancelled>
    where
        F: Fn(Band, &mut [u32]) -> Result<(), Cancelled> + Sync,
    {
        self.pool
            .install(|| jobs.into_par_iter().try_for_each(|(band, rows)| fill(band, rows)))
    }

    fn display_name(&self) -> &str {
        "Worker pool"
    }
}
