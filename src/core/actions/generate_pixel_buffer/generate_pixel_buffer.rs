use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours every value of `field` into a packed RGB buffer of the same shape.
pub fn generate_pixel_buffer<CMap: ColourMap<f64>>(
    field: &EscapeField,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(field.grid().size() * 3);

    for &value in field.values() {
        let Colour { r, g, b } = mapper.map(value);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(field.grid(), buffer)?)
}
