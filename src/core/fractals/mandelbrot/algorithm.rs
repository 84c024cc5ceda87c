use std::convert::Infallible;
use std::f64::consts::LN_2;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_field::INTERIOR;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewState;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating `z -> z^2 + c` from zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Escape {
    Interior,
    Escaped { count: u32, smooth: f64 },
}

impl Escape {
    /// The value stored in an escape field for this outcome.
    #[must_use]
    pub fn field_value(self) -> f64 {
        match self {
            Self::Interior => INTERIOR,
            Self::Escaped { smooth, .. } => smooth,
        }
    }
}

/// Iterates a single point. `count` is the number of updates applied before
/// the magnitude check first exceeded 2.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> Escape {
    let mut z = Complex::ZERO;
    let mut count = 0;

    while count < max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return Escape::Escaped {
                count,
                smooth: smooth_value(count, z.magnitude()),
            };
        }

        z = z * z + c;
        count += 1;
    }

    Escape::Interior
}

// magnitude > 2 here, so both logarithms are defined; overflowing magnitudes
// fall through to the floor instead of reaching the field as -inf
fn smooth_value(count: u32, magnitude: f64) -> f64 {
    let smooth = f64::from(count) + 1.0 - (magnitude.ln() / LN_2).ln() / LN_2;

    smooth.max(f64::MIN_POSITIVE)
}

/// Smooth escape-time kernel over one render tier.
///
/// Sample `(sx, sy)` of a `sample_grid` covers reference pixel
/// `(sx * W / w, sy * H / h)`, so preview and full grids see the same region
/// of the plane.
#[derive(Debug, Clone)]
pub struct MandelbrotAlgorithm {
    view: ViewState,
    scale_x: f64,
    scale_y: f64,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.view.pixel_to_complex(
            f64::from(pixel.x) * self.scale_x,
            f64::from(pixel.y) * self.scale_y,
        );

        Ok(escape_time(c, self.max_iterations).field_value())
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        view: ViewState,
        reference_grid: PixelGrid,
        sample_grid: PixelGrid,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            view,
            scale_x: f64::from(reference_grid.width()) / f64::from(sample_grid.width()),
            scale_y: f64::from(reference_grid.height()) / f64::from(sample_grid.height()),
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> ViewState {
        ViewState::new(150.0, -2.0, -1.5).unwrap()
    }

    fn grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::new(width, height).unwrap()
    }

    #[test]
    fn test_corner_of_home_view_escapes_after_one_update() {
        let escape = escape_time(Complex::new(-2.0, -1.5), 150);

        assert_eq!(
            escape,
            Escape::Escaped {
                count: 1,
                smooth: 1.5973562951443432
            }
        );
    }

    #[test]
    fn test_preview_origin_sample_is_the_offset() {
        let algorithm = MandelbrotAlgorithm::new(home(), grid(400, 300), grid(4, 4), 150).unwrap();

        let value = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(value.to_bits(), 1.5973562951443432_f64.to_bits());
    }

    #[test]
    fn test_origin_is_interior() {
        assert_eq!(escape_time(Complex::ZERO, 150), Escape::Interior);
        assert_eq!(Escape::Interior.field_value(), INTERIOR);
    }

    #[test]
    fn test_escape_on_last_allowed_update_counts_as_interior() {
        // c = 1: z goes 0, 1, 2, 5; the check that sees 5 needs a fourth pass
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 3), Escape::Interior);
        assert!(matches!(
            escape_time(Complex::new(1.0, 0.0), 4),
            Escape::Escaped { count: 3, .. }
        ));
    }

    #[test]
    fn test_huge_magnitude_is_floored_positive() {
        let escape = escape_time(Complex::new(1e300, 1e300), 10);

        match escape {
            Escape::Escaped { count, smooth } => {
                assert_eq!(count, 1);
                assert_eq!(smooth, f64::MIN_POSITIVE);
            }
            Escape::Interior => panic!("far point must escape"),
        }
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let result = MandelbrotAlgorithm::new(home(), grid(400, 300), grid(400, 300), 0);

        assert_eq!(result.unwrap_err(), MandelbrotError::ZeroMaxIterations);
    }

    #[test]
    fn test_full_tier_samples_map_to_reference_pixels() {
        let view = home();
        let algorithm = MandelbrotAlgorithm::new(view, grid(400, 300), grid(400, 300), 50).unwrap();

        let value = algorithm.compute(Point { x: 300, y: 150 }).unwrap();
        let expected = escape_time(view.pixel_to_complex(300.0, 150.0), 50).field_value();

        assert_eq!(value.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_preview_samples_scale_to_reference_pixels() {
        let view = home();
        let algorithm = MandelbrotAlgorithm::new(view, grid(400, 300), grid(160, 120), 50).unwrap();

        let value = algorithm.compute(Point { x: 80, y: 60 }).unwrap();
        let expected = escape_time(view.pixel_to_complex(200.0, 150.0), 50).field_value();

        assert_eq!(value.to_bits(), expected.to_bits());
    }
}
