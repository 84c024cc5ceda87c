use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::viewport::{ViewState, ViewportError};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Typed values derived from a validated [`MandelbrotConfig`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub reference_grid: PixelGrid,
    pub preview_grid: PixelGrid,
    pub initial_view: ViewState,
    pub iteration_policy: IterationPolicy,
}

/// Explorer settings. Every field may be omitted from a JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MandelbrotConfig {
    pub render_width: u32,
    pub render_height: u32,
    pub preview_width: u32,
    pub preview_height: u32,
    pub base_iterations: u32,
    pub max_iterations_cap: u32,
    pub initial_zoom: f64,
    pub initial_offset_x: f64,
    pub initial_offset_y: f64,
    pub zoom_factor: f64,
    pub pan_step: f64,
    pub drag_smoothing: f64,
    pub frames_per_second: u32,
    pub stats_interval_ms: u64,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            render_width: 400,
            render_height: 300,
            preview_width: 160,
            preview_height: 120,
            base_iterations: 150,
            max_iterations_cap: 1000,
            initial_zoom: 150.0,
            initial_offset_x: -2.0,
            initial_offset_y: -1.5,
            zoom_factor: 1.5,
            pan_step: 50.0,
            drag_smoothing: 0.8,
            frames_per_second: 15,
            stats_interval_ms: 1000,
            window_width: 800,
            window_height: 600,
        }
    }
}

impl MandelbrotConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validates every field and builds the typed values the explorer runs on.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let reference_grid = self
            .reference_grid()
            .map_err(|err| invalid("render_width/render_height", err.to_string()))?;
        let preview_grid = self
            .preview_grid()
            .map_err(|err| invalid("preview_width/preview_height", err.to_string()))?;

        let iteration_policy = self.iteration_policy().map_err(|err| match err {
            MandelbrotError::ZeroMaxIterations => invalid("base_iterations", err.to_string()),
            MandelbrotError::IterationCapBelowBase { .. } => {
                invalid("max_iterations_cap", err.to_string())
            }
            _ => invalid("initial_zoom", err.to_string()),
        })?;

        let initial_view = self.initial_view().map_err(|err| match err {
            ViewportError::InvalidZoom { .. } => invalid("initial_zoom", err.to_string()),
            _ => invalid("initial_offset_x/initial_offset_y", err.to_string()),
        })?;

        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(invalid(
                "zoom_factor",
                format!("must be finite and greater than 1, got {}", self.zoom_factor),
            ));
        }

        if !self.pan_step.is_finite() || self.pan_step < 0.0 {
            return Err(invalid(
                "pan_step",
                format!("must be finite and non-negative, got {}", self.pan_step),
            ));
        }

        if !self.drag_smoothing.is_finite() || self.drag_smoothing < 0.0 {
            return Err(invalid(
                "drag_smoothing",
                format!("must be finite and non-negative, got {}", self.drag_smoothing),
            ));
        }

        if self.frames_per_second == 0 {
            return Err(invalid("frames_per_second", "must be greater than zero"));
        }

        Ok(ResolvedConfig {
            reference_grid,
            preview_grid,
            initial_view,
            iteration_policy,
        })
    }

    pub fn reference_grid(&self) -> Result<PixelGrid, PixelGridError> {
        PixelGrid::new(self.render_width, self.render_height)
    }

    pub fn preview_grid(&self) -> Result<PixelGrid, PixelGridError> {
        PixelGrid::new(self.preview_width, self.preview_height)
    }

    pub fn initial_view(&self) -> Result<ViewState, ViewportError> {
        ViewState::new(
            self.initial_zoom,
            self.initial_offset_x,
            self.initial_offset_y,
        )
    }

    pub fn iteration_policy(&self) -> Result<IterationPolicy, MandelbrotError> {
        IterationPolicy::new(
            self.base_iterations,
            self.max_iterations_cap,
            self.initial_zoom,
        )
    }
}
