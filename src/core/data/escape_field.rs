use thiserror::Error;

use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Smooth value stored for samples that never escaped.
pub const INTERIOR: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeFieldError {
    #[error("escape field for a {width}x{height} grid needs {expected} values, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// One smooth escape value per sample, row-major.
///
/// [`INTERIOR`] (or anything non-positive) marks a sample that stayed bounded
/// for the whole iteration cap; positive values are fractional escape
/// counts.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeField {
    grid: PixelGrid,
    max_iterations: u32,
    values: Vec<f64>,
}

impl EscapeField {
    pub fn from_values(
        grid: PixelGrid,
        max_iterations: u32,
        values: Vec<f64>,
    ) -> Result<Self, EscapeFieldError> {
        if values.len() != grid.size() {
            return Err(EscapeFieldError::SizeMismatch {
                width: grid.width(),
                height: grid.height(),
                expected: grid.size(),
                actual: values.len(),
            });
        }

        Ok(Self {
            grid,
            max_iterations,
            values,
        })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value_at(&self, point: Point) -> Option<f64> {
        self.grid.index_of(point).map(|index| self.values[index])
    }
}

#[must_use]
pub fn is_interior(value: f64) -> bool {
    value <= INTERIOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_checks_length() {
        let grid = PixelGrid::new(3, 2).unwrap();

        let result = EscapeField::from_values(grid, 10, vec![0.0; 5]);

        assert_eq!(
            result,
            Err(EscapeFieldError::SizeMismatch {
                width: 3,
                height: 2,
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_value_at_reads_row_major() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let field = EscapeField::from_values(grid, 10, vec![0.0, 1.5, 2.5, 3.5]).unwrap();

        assert_eq!(field.value_at(Point { x: 1, y: 0 }), Some(1.5));
        assert_eq!(field.value_at(Point { x: 0, y: 1 }), Some(2.5));
        assert_eq!(field.value_at(Point { x: 2, y: 0 }), None);
    }

    #[test]
    fn test_is_interior() {
        assert!(is_interior(INTERIOR));
        assert!(is_interior(-1.0));
        assert!(!is_interior(f64::MIN_POSITIVE));
    }
}
