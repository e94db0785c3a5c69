//! Whole-frame rendering: band partitioning, parallel fill and the
//! end-of-frame barrier.

pub mod dispatchers;
pub mod frame_renderer;
pub mod ports;

use std::num::NonZeroU32;

use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::data::band::Band;
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::viewport::Viewport;
use crate::core::util::partition_bands::partition_bands;
use frame_renderer::FrameRenderer;
use ports::{BandDispatcher, ColourMap, FractalAlgorithm};

/// Bands per frame when none is configured.
pub const DEFAULT_BAND_COUNT: NonZeroU32 = match NonZeroU32::new(40) {
    Some(count) => count,
    None => NonZeroU32::MIN,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Renders every pixel of `raster` for `viewport`.
///
/// Rows are split into `band_count` bands which `dispatcher` fills
/// concurrently; the call returns only once every band has finished. On
/// [`RenderFrameError::Cancelled`] the raster holds a partial frame and must
/// not be presented.
pub fn render_frame<A, M, D, C>(
    renderer: &FrameRenderer<A, M>,
    viewport: &Viewport,
    raster: &mut Raster,
    band_count: NonZeroU32,
    dispatcher: &D,
    cancel: &C,
) -> Result<(), RenderFrameError>
where
    A: FractalAlgorithm,
    M: ColourMap,
    D: BandDispatcher,
    C: CancelToken,
{
    let geometry = renderer.geometry();
    raster.ensure_same_size(geometry.width(), geometry.height())?;

    let bands = partition_bands(raster.height(), band_count);
    let jobs = raster.split_bands_mut(&bands)?;
    let viewport = *viewport;

    dispatcher.dispatch(jobs, &|band: Band, rows: &mut [u32]| {
        renderer.render_band(&viewport, band, rows, cancel)
    })?;

    Ok(())
}
