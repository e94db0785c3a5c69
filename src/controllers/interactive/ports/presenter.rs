use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives frames from the render worker thread.
///
/// Implementations must copy what they need before returning; the worker
/// reuses its raster for the next request.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent<'_>);
}
