use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Computes the escape field of `view` sampled on `sample_grid`.
///
/// Rows run in parallel but nothing is shared between calls, so the preview
/// and full tiers can be computed independently from the same view.
#[tracing::instrument(
    skip_all,
    fields(width = sample_grid.width(), height = sample_grid.height(), max_iterations = max_iterations)
)]
pub fn compute_escape_field(
    view: ViewState,
    reference_grid: PixelGrid,
    sample_grid: PixelGrid,
    max_iterations: u32,
) -> Result<EscapeField, MandelbrotError> {
    let algorithm = MandelbrotAlgorithm::new(view, reference_grid, sample_grid, max_iterations)?;

    let values = match generate_fractal_rayon(sample_grid, &algorithm) {
        Ok(values) => values,
        Err(never) => match never {},
    };

    Ok(EscapeField::from_values(sample_grid, max_iterations, values)?)
}
