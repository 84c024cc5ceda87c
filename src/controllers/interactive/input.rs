use std::collections::HashSet;

use crate::controllers::interactive::data::input_event::{ExplorerKey, PointerButton};
use crate::core::data::point::ScreenPosition;

/// What the scheduler needs to know about the user right now.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub pan_key_held: bool,
    pub pointer_held: bool,
    pub dragging: bool,
}

impl InputSnapshot {
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.pan_key_held || self.pointer_held || self.dragging
    }
}

/// A primary-button gesture from press to release.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragGesture {
    pub press: ScreenPosition,
    pub last: ScreenPosition,
    pub moved: bool,
}

/// Held keys, held buttons and the current drag gesture.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    held_keys: HashSet<ExplorerKey>,
    held_buttons: HashSet<PointerButton>,
    drag: Option<DragGesture>,
}

impl InteractionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only directional keys are tracked as held.
    pub fn key_pressed(&mut self, key: ExplorerKey) {
        if key.is_pan_key() {
            self.held_keys.insert(key);
        }
    }

    pub fn key_released(&mut self, key: ExplorerKey) {
        self.held_keys.remove(&key);
    }

    pub fn button_pressed(&mut self, button: PointerButton, position: ScreenPosition) {
        self.held_buttons.insert(button);

        if button == PointerButton::Primary {
            self.drag = Some(DragGesture {
                press: position,
                last: position,
                moved: false,
            });
        }
    }

    /// Ends a press. Returns the finished gesture for the primary button.
    pub fn button_released(&mut self, button: PointerButton) -> Option<DragGesture> {
        let was_held = self.held_buttons.remove(&button);

        if button == PointerButton::Primary && was_held {
            return self.drag.take();
        }

        None
    }

    /// Records pointer motion. Returns the delta to pan by while a primary
    /// drag is active and the pointer actually moved.
    pub fn pointer_moved(&mut self, position: ScreenPosition) -> Option<(f64, f64)> {
        let drag = self.drag.as_mut()?;
        let delta = (position.x - drag.last.x, position.y - drag.last.y);

        if delta == (0.0, 0.0) {
            return None;
        }

        drag.last = position;
        drag.moved = true;

        Some(delta)
    }

    /// Drops every held key and button and abandons the drag gesture.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.held_buttons.clear();
        self.drag = None;
    }

    /// Sum of the directions of every held pan key. Twin keys add up.
    #[must_use]
    pub fn pan_vector(&self) -> (f64, f64) {
        self.held_keys
            .iter()
            .filter_map(|key| key.pan_direction())
            .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy))
    }

    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pan_key_held: !self.held_keys.is_empty(),
            pointer_held: !self.held_buttons.is_empty(),
            dragging: self.drag.is_some_and(|drag| drag.moved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> ScreenPosition {
        ScreenPosition::new(x, y)
    }

    #[test]
    fn test_idle_state_is_not_interacting() {
        let state = InteractionState::new();

        assert_eq!(state.snapshot(), InputSnapshot::default());
        assert!(!state.snapshot().is_interacting());
    }

    #[test]
    fn test_only_pan_keys_are_held() {
        let mut state = InteractionState::new();

        state.key_pressed(ExplorerKey::ZoomIn);
        state.key_pressed(ExplorerKey::Reset);
        assert!(!state.snapshot().is_interacting());

        state.key_pressed(ExplorerKey::KeyW);
        assert!(state.snapshot().pan_key_held);

        state.key_released(ExplorerKey::KeyW);
        assert!(!state.snapshot().is_interacting());
    }

    #[test]
    fn test_twin_keys_add_up_and_opposites_cancel() {
        let mut state = InteractionState::new();

        state.key_pressed(ExplorerKey::ArrowLeft);
        state.key_pressed(ExplorerKey::KeyA);
        assert_eq!(state.pan_vector(), (-2.0, 0.0));

        state.key_pressed(ExplorerKey::ArrowRight);
        state.key_pressed(ExplorerKey::KeyD);
        assert_eq!(state.pan_vector(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_reports_deltas_and_marks_gesture() {
        let mut state = InteractionState::new();
        state.button_pressed(PointerButton::Primary, at(10.0, 10.0));

        assert_eq!(state.pointer_moved(at(10.0, 10.0)), None);
        assert!(!state.snapshot().dragging);

        assert_eq!(state.pointer_moved(at(15.0, 7.0)), Some((5.0, -3.0)));
        assert_eq!(state.pointer_moved(at(16.0, 7.0)), Some((1.0, 0.0)));
        assert!(state.snapshot().dragging);

        let gesture = state.button_released(PointerButton::Primary).unwrap();
        assert!(gesture.moved);
        assert_eq!(gesture.press, at(10.0, 10.0));
        assert!(!state.snapshot().is_interacting());
    }

    #[test]
    fn test_motion_without_primary_press_is_ignored() {
        let mut state = InteractionState::new();
        state.button_pressed(PointerButton::Secondary, at(0.0, 0.0));

        assert_eq!(state.pointer_moved(at(5.0, 5.0)), None);
        assert!(state.snapshot().pointer_held);
        assert_eq!(state.button_released(PointerButton::Secondary), None);
    }

    #[test]
    fn test_release_all_clears_keys_buttons_and_drag() {
        let mut state = InteractionState::new();
        state.key_pressed(ExplorerKey::ArrowLeft);
        state.button_pressed(PointerButton::Primary, at(3.0, 4.0));
        state.pointer_moved(at(8.0, 4.0));
        assert!(state.snapshot().is_interacting());

        state.release_all();

        assert_eq!(state.snapshot(), InputSnapshot::default());
        assert_eq!(state.pan_vector(), (0.0, 0.0));
        assert_eq!(state.pointer_moved(at(9.0, 4.0)), None);
        assert_eq!(state.button_released(PointerButton::Primary), None);
    }

    #[test]
    fn test_release_without_press_has_no_gesture() {
        let mut state = InteractionState::new();

        assert_eq!(state.button_released(PointerButton::Primary), None);
    }
}
