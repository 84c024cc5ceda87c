use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Single-threaded row-major generation. Reference for the parallel path.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    grid: PixelGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
