use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::pixel_grid::PixelGridError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("degenerate render request: {0}")]
    DegenerateRequest(#[from] PixelGridError),
    #[error("escape field computation failed: {0}")]
    Engine(#[from] MandelbrotError),
    #[error("colouring failed: {0}")]
    PixelBuffer(#[from] GeneratePixelBufferError),
}
