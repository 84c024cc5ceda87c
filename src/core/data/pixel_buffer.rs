use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

fn grid_to_buffer_size(grid: PixelGrid) -> usize {
    grid.size() * 3
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel {pixel:?} outside of {grid:?}")]
    PixelOutsideBounds { pixel: Point, grid: PixelGrid },
    #[error("pixel grid size {grid_size} does not match buffer size {buffer_size}")]
    BoundsMismatch { grid_size: usize, buffer_size: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    grid: PixelGrid,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            grid,
            buffer: vec![0; grid_to_buffer_size(grid)],
        }
    }

    pub fn from_data(grid: PixelGrid, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = grid_to_buffer_size(grid);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.byte_index(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_index(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        self.grid
            .index_of(pixel)
            .map(|index| index * 3)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            })
    }
}
