use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction (held).
    MoveForward,
    /// Move against the view direction (held).
    MoveBackward,
    /// Strafe left (held).
    StrafeLeft,
    /// Strafe right (held).
    StrafeRight,
    /// Raise the camera (held).
    MoveUp,
    /// Lower the camera (held).
    MoveDown,
    /// Request window close (held).
    Close,
    /// Switch projection mode (on press).
    ToggleProjection,
}

impl KeyAction {
    /// Whether the action fires once per press rather than every frame
    /// while held.
    #[must_use]
    pub fn is_edge_triggered(self) -> bool {
        matches!(self, Self::ToggleProjection)
    }
}

/// Set of bound actions whose keys are currently down.
#[derive(Debug, Default, Clone)]
pub struct HeldKeys {
    down: HashSet<KeyAction>,
}

impl HeldKeys {
    /// Record a press. Returns `true` only on the up→down transition.
    pub fn press(&mut self, action: KeyAction) -> bool {
        self.down.insert(action)
    }

    /// Record a release.
    pub fn release(&mut self, action: KeyAction) {
        let _ = self.down.remove(&action);
    }

    /// Whether the key for `action` is down.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.down.contains(&action)
    }

    /// Forget every held key.
    pub fn clear(&mut self) {
        self.down.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_reports_only_the_transition() {
        let mut held = HeldKeys::default();
        assert!(held.press(KeyAction::MoveForward));
        assert!(!held.press(KeyAction::MoveForward));
        assert!(held.is_held(KeyAction::MoveForward));

        held.release(KeyAction::MoveForward);
        assert!(!held.is_held(KeyAction::MoveForward));
        assert!(held.press(KeyAction::MoveForward));
    }

    #[test]
    fn clear_drops_everything() {
        let mut held = HeldKeys::default();
        let _ = held.press(KeyAction::StrafeLeft);
        let _ = held.press(KeyAction::Close);
        held.clear();
        assert!(!held.is_held(KeyAction::StrafeLeft));
        assert!(!held.is_held(KeyAction::Close));
    }

    #[test]
    fn only_projection_toggle_is_edge_triggered() {
        assert!(KeyAction::ToggleProjection.is_edge_triggered());
        assert!(!KeyAction::MoveForward.is_edge_triggered());
        assert!(!KeyAction::Close.is_edge_triggered());
    }
}
