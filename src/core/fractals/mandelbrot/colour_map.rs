use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_field::is_interior;

/// Colours a smooth escape value: interior is black, escaped samples blend
/// from blue (fast escape) to yellow-white (slow escape).
#[must_use]
pub fn colour(value: f64, max_iterations: u32) -> Colour {
    if is_interior(value) || value.is_nan() {
        return Colour::BLACK;
    }

    let t = (value / f64::from(max_iterations)).clamp(0.0, 1.0);
    let warm = channel(t);

    Colour {
        r: warm,
        g: warm,
        b: channel(1.0 - t),
    }
}

fn channel(t: f64) -> u8 {
    (255.0 * t).round() as u8
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SmoothLinearGradient {
    max_iterations: u32,
}

impl SmoothLinearGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<f64> for SmoothLinearGradient {
    fn map(&self, value: f64) -> Colour {
        colour(value, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        "Smooth linear gradient"
    }
}
