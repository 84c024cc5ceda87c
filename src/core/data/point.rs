use serde::{Deserialize, Serialize};

/// A sample position inside a render grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A pointer position in reference-grid pixel units.
///
/// Unlike [`Point`] this is fractional and may lie outside the grid: the
/// display collaborator letterboxes the image, so a click in the border still
/// names a valid anchor on the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl ScreenPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
