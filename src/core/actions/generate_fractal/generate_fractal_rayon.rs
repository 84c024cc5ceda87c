use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Generates per-sample results in parallel, one rayon task per row.
///
/// Rows only read the algorithm, and every row is joined before the results
/// are flattened, so the output is row-major and identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
#[tracing::instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn generate_fractal_rayon<Alg>(
    grid: PixelGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = grid.width();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..grid.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for x in 0..width {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
