use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes finished frames to disk.
pub trait FilePresenterPort {
    fn format_name(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}
