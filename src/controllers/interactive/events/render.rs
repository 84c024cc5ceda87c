use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::ResolutionTier;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub generation: u64,
    pub tier: ResolutionTier,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderFailure),
}
