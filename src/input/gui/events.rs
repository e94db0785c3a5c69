/// User events posted to the winit event loop from other threads.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A new frame or render error is waiting in the frame slot.
    ///
    /// The handler decides whether a redraw is actually needed.
    Wake,
}
