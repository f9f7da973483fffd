use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// ```toml
/// [keybindings]
/// move_forward = "KeyW"
/// toggle_projection = "KeyP"
/// ```
pub struct KeybindingOptions {
    /// Held: move along the view direction.
    pub move_forward: String,
    /// Held: move against the view direction.
    pub move_backward: String,
    /// Held: strafe left.
    pub strafe_left: String,
    /// Held: strafe right.
    pub strafe_right: String,
    /// Held: raise the camera.
    pub move_up: String,
    /// Held: lower the camera.
    pub move_down: String,
    /// Held: request window close.
    pub close: String,
    /// Pressed: switch between perspective and orthographic.
    pub toggle_projection: String,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            move_forward: "KeyW".into(),
            move_backward: "KeyS".into(),
            strafe_left: "KeyA".into(),
            strafe_right: "KeyD".into(),
            move_up: "KeyQ".into(),
            move_down: "KeyE".into(),
            close: "Escape".into(),
            toggle_projection: "KeyP".into(),
        }
    }
}

impl KeybindingOptions {
    /// Every action paired with its bound key.
    #[must_use]
    pub fn entries(&self) -> [(KeyAction, &str); 8] {
        [
            (KeyAction::MoveForward, self.move_forward.as_str()),
            (KeyAction::MoveBackward, self.move_backward.as_str()),
            (KeyAction::StrafeLeft, self.strafe_left.as_str()),
            (KeyAction::StrafeRight, self.strafe_right.as_str()),
            (KeyAction::MoveUp, self.move_up.as_str()),
            (KeyAction::MoveDown, self.move_down.as_str()),
            (KeyAction::Close, self.close.as_str()),
            (KeyAction::ToggleProjection, self.toggle_projection.as_str()),
        ]
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.entries()
            .into_iter()
            .find_map(|(action, bound)| (bound == key).then_some(action))
    }
}
