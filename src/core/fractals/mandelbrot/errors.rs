use thiserror::Error;

use crate::core::data::escape_field::EscapeFieldError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("iteration cap {cap} is below the base iteration count {base}")]
    IterationCapBelowBase { base: u32, cap: u32 },
    #[error("initial zoom must be positive and finite, got {zoom}")]
    InvalidInitialZoom { zoom: f64 },
    #[error(transparent)]
    EscapeField(#[from] EscapeFieldError),
}
