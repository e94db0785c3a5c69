//! Interactive viewer application layer.
//!
//! The UI thread owns a [`ViewerSession`], which folds input into the
//! viewport and submits [`RenderRequest`]s to the background
//! [`RenderWorker`]. Finished frames come back through the [`FrameSlot`]
//! and are pushed to a [`DisplaySurface`].

mod controller;
pub mod data;
pub mod events;
pub mod frame_slot;
pub mod ports;
pub mod session;

pub use controller::{RenderWorker, RenderWorkerError, WorkerSettings};
pub use data::frame_data::CompletedFrame;
pub use data::render_request::{RenderRequest, RenderSettings};
pub use events::render_event::{RenderError, RenderEvent};
pub use frame_slot::FrameSlot;
pub use ports::{DisplaySurface, FramePresenterPort};
pub use session::{SessionControl, ViewerSession};
