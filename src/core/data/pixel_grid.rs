use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelGridError {
    #[error("pixel grid size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of a render grid, anchored at the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelGridError> {
        if width == 0 || height == 0 {
            return Err(PixelGridError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of `point`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.contains_point(point)
            .then(|| point.y as usize * self.width as usize + point.x as usize)
    }
}
