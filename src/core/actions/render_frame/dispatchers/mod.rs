pub mod pool;
pub mod scoped_threads;

use std::num::NonZeroUsize;

use rayon::ThreadPoolBuildError;

use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::render_frame::ports::band_dispatcher::BandDispatcher;
use crate::core::data::band::Band;
use pool::PoolDispatcher;
use scoped_threads::ScopedThreadDispatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DispatchStrategy {
    /// Persistent worker pool shared by every frame.
    #[default]
    Pool,
    /// Fresh scoped thread per band on every frame.
    ScopedThreads,
}

/// Dispatcher chosen at runtime from a [`DispatchStrategy`].
#[derive(Debug)]
pub enum Dispatcher {
    Pool(PoolDispatcher),
    ScopedThreads(ScopedThreadDispatcher),
}

impl Dispatcher {
    pub fn new(strategy: DispatchStrategy, threads: NonZeroUsize) -> Result<Self, ThreadPoolBuildError> {
        Ok(match strategy {
            DispatchStrategy::Pool => Self::Pool(PoolDispatcher::new(threads)?),
            DispatchStrategy::ScopedThreads => Self::ScopedThreads(ScopedThreadDispatcher),
        })
    }
}

impl BandDispatcher for Dispatcher {
    fn dispatch<F>(&self, jobs: Vec<(Band, &mut [u32])>, fill: &F) -> Result<(), Cancelled>
    where
        F: Fn(Band, &mut [u32]) -> Result<(), Cancelled> + Sync,
    {
        match self {
            Self::Pool(dispatcher) => dispatcher.dispatch(jobs, fill),
            Self::ScopedThreads(dispatcher) => dispatcher.dispatch(jobs, fill),
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Pool(dispatcher) => dispatcher.display_name(),
            Self::ScopedThreads(dispatcher) => dispatcher.display_name(),
        }
    }
}
