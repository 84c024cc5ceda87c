use std::fmt;
use std::time::Duration;

use crate::controllers::interactive::data::render_request::ResolutionTier;

pub const CONTROLS_HELP: &[&str] = &[
    "left click: zoom in",
    "right click: zoom out",
    "scroll: zoom in/out at pointer",
    "drag: pan",
    "arrows / WASD: pan",
    "+ / -: zoom at centre",
    "R: reset view",
    "H: help",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportChange {
    KeyPan,
    DragPan,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl fmt::Display for ViewportChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeyPan => "key_pan",
            Self::DragPan => "drag_pan",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::Reset => "reset",
        };

        f.write_str(name)
    }
}

/// Typed log record emitted by the interactive controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerEvent {
    ViewportChanged {
        change: ViewportChange,
        zoom: f64,
        offset_x: f64,
        offset_y: f64,
    },
    /// A viewport mutation was refused; the view is unchanged.
    ViewportRejected {
        change: ViewportChange,
        message: String,
    },
    RenderStarted {
        tier: ResolutionTier,
        generation: u64,
        width: u32,
        height: u32,
        max_iterations: u32,
        zoom: f64,
        offset_x: f64,
        offset_y: f64,
    },
    RenderDone {
        tier: ResolutionTier,
        generation: u64,
        duration: Duration,
    },
    RenderFailed {
        tier: ResolutionTier,
        message: String,
    },
    Stats {
        fps: f64,
        zoom: f64,
        offset_x: f64,
        offset_y: f64,
    },
    HelpRequested,
}
