use crate::controllers::interactive::data::frame_data::CompletedFrame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent<'a> {
    Frame(CompletedFrame<'a>),
    Error(RenderError),
}

impl RenderEvent<'_> {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            RenderEvent::Frame(frame) => frame.generation,
            RenderEvent::Error(error) => error.generation,
        }
    }
}
