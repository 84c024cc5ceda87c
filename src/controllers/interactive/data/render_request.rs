use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    Preview,
    Full,
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preview => write!(f, "preview"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// A single render job: grid size plus the tier it was requested at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub resolution_tier: ResolutionTier,
}

impl RenderRequest {
    /// Rejects zero-sized requests before anything is computed.
    pub fn grid(&self) -> Result<PixelGrid, PixelGridError> {
        PixelGrid::new(self.width, self.height)
    }
}
