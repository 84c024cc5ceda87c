use std::time::Duration;

use crate::controllers::interactive::data::render_request::ResolutionTier;
use crate::core::data::pixel_buffer::PixelBuffer;

/// One finished render. Every render gets its own buffer; displays should show
/// the highest generation they have received.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub tier: ResolutionTier,
    pub max_iterations: u32,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
