//! Host-agnostic input events.
//!
//! Hosts translate their native events into these; positions are already in
//! reference-grid pixel units.

use serde::{Deserialize, Serialize};

use crate::core::data::point::ScreenPosition;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorerKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyA,
    KeyD,
    KeyW,
    KeyS,
    ZoomIn,
    ZoomOut,
    Reset,
    Help,
}

impl ExplorerKey {
    /// Unit pan direction for the directional keys.
    #[must_use]
    pub fn pan_direction(self) -> Option<(f64, f64)> {
        match self {
            Self::ArrowLeft | Self::KeyA => Some((-1.0, 0.0)),
            Self::ArrowRight | Self::KeyD => Some((1.0, 0.0)),
            Self::ArrowUp | Self::KeyW => Some((0.0, -1.0)),
            Self::ArrowDown | Self::KeyS => Some((0.0, 1.0)),
            Self::ZoomIn | Self::ZoomOut | Self::Reset | Self::Help => None,
        }
    }

    #[must_use]
    pub fn is_pan_key(self) -> bool {
        self.pan_direction().is_some()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    PointerPressed {
        button: PointerButton,
        position: ScreenPosition,
    },
    PointerMoved {
        position: ScreenPosition,
    },
    PointerReleased {
        button: PointerButton,
        position: ScreenPosition,
    },
    Scrolled {
        delta: f64,
        position: ScreenPosition,
    },
    KeyPressed {
        key: ExplorerKey,
    },
    KeyReleased {
        key: ExplorerKey,
    },
    /// The host stopped delivering input, so nothing is held any more.
    FocusLost,
    CloseRequested,
}
