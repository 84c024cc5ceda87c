use std::error::Error;

use crate::core::data::point::Point;

/// Per-sample computation over a render grid.
///
/// Implementations must be pure with respect to `pixel`: generators call
/// `compute` from several threads and in no particular order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
