//! Translation from `winit` keys and buttons to explorer input.

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::controllers::interactive::data::input_event::{ExplorerKey, PointerButton};

#[must_use]
pub fn explorer_key(code: KeyCode) -> Option<ExplorerKey> {
    let key = match code {
        KeyCode::ArrowLeft => ExplorerKey::ArrowLeft,
        KeyCode::ArrowRight => ExplorerKey::ArrowRight,
        KeyCode::ArrowUp => ExplorerKey::ArrowUp,
        KeyCode::ArrowDown => ExplorerKey::ArrowDown,
        KeyCode::KeyA => ExplorerKey::KeyA,
        KeyCode::KeyD => ExplorerKey::KeyD,
        KeyCode::KeyW => ExplorerKey::KeyW,
        KeyCode::KeyS => ExplorerKey::KeyS,
        // `=` shares a key with `+` on most layouts
        KeyCode::Equal | KeyCode::NumpadAdd => ExplorerKey::ZoomIn,
        KeyCode::Minus | KeyCode::NumpadSubtract => ExplorerKey::ZoomOut,
        KeyCode::KeyR => ExplorerKey::Reset,
        KeyCode::KeyH => ExplorerKey::Help,
        _ => return None,
    };

    Some(key)
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}
