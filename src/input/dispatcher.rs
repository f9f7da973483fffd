//! Routes platform-agnostic input into the camera and scene state.
//!
//! The dispatcher owns all transient input state (held keys, pointer
//! baseline) and the key-binding map. It never touches the GPU.

use super::event::{InputEvent, MouseButton};
use super::keyboard::{HeldKeys, KeyAction};
use super::pointer::PointerTracker;
use crate::camera::MoveDirection;
use crate::options::{KeybindingOptions, Options};
use crate::scene::SceneState;

/// Scroll units arriving as pixels are scaled by this to match line units.
pub const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Converts raw window events into camera and scene-state updates.
///
/// # Usage
///
/// ```ignore
/// // For every window event:
/// let _ = dispatcher.handle_event(event, &mut state);
///
/// // Once per frame, before rendering:
/// let dt = state.timing.tick();
/// dispatcher.apply_held_keys(&mut state, dt);
/// ```
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    bindings: KeybindingOptions,
    held: HeldKeys,
    pointer: PointerTracker,
    height_step: f32,
}

impl InputDispatcher {
    /// Dispatcher with the given bindings and per-frame height step.
    #[must_use]
    pub fn new(bindings: KeybindingOptions, height_step: f32) -> Self {
        Self {
            bindings,
            held: HeldKeys::default(),
            pointer: PointerTracker::new(),
            height_step,
        }
    }

    /// Dispatcher configured from the viewer options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.keybindings.clone(), options.camera.height_step)
    }

    /// Forget the pointer baseline, e.g. after the cursor is re-grabbed.
    pub fn reset_pointer(&mut self) {
        self.pointer.reset();
    }

    /// Route one event. Returns `true` if the event changed any state.
    pub fn handle_event(&mut self, event: InputEvent, state: &mut SceneState) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let delta = self.pointer.sample(x, y);
                state.camera.process_pointer_delta(delta.x, delta.y, true);
                true
            }
            InputEvent::PointerMotion { dx, dy } => {
                state.camera.process_pointer_delta(dx, -dy, true);
                true
            }
            InputEvent::Scroll { delta } => {
                state.camera.adjust_movement_speed(delta);
                log::debug!("movement speed now {:.2}", state.camera.movement_speed());
                true
            }
            InputEvent::MouseButton { button, pressed } => {
                log_mouse_button(button, pressed);
                false
            }
            InputEvent::Key {
                code,
                pressed,
                repeat,
            } => self.handle_key(&code, pressed, repeat, state),
            InputEvent::Resized { width, height } => state.resize(width, height),
            InputEvent::FocusLost => {
                self.held.clear();
                true
            }
        }
    }

    /// Edge path: update the held set, and fire discrete actions on a
    /// fresh press only.
    fn handle_key(
        &mut self,
        code: &str,
        pressed: bool,
        repeat: bool,
        state: &mut SceneState,
    ) -> bool {
        let Some(action) = self.bindings.lookup(code) else {
            return false;
        };

        if !pressed {
            self.held.release(action);
            return true;
        }

        let fresh = self.held.press(action) && !repeat;
        if fresh && action.is_edge_triggered() {
            state.toggle_projection();
            log::debug!("projection mode: {:?}", state.projection_mode);
        }
        true
    }

    /// Level path: apply every held continuous action once, scaled by
    /// `dt` seconds. Call exactly once per frame.
    pub fn apply_held_keys(&self, state: &mut SceneState, dt: f32) {
        if self.held.is_held(KeyAction::Close) {
            state.request_close();
        }

        let distance = state.camera.movement_speed() * dt;
        let moves = [
            (KeyAction::MoveForward, MoveDirection::Forward),
            (KeyAction::MoveBackward, MoveDirection::Backward),
            (KeyAction::StrafeLeft, MoveDirection::Left),
            (KeyAction::StrafeRight, MoveDirection::Right),
        ];
        for (action, direction) in moves {
            if self.held.is_held(action) {
                state.camera.process_keyboard_movement(direction, distance);
            }
        }

        if self.held.is_held(KeyAction::MoveUp) {
            state.camera.adjust_height(self.height_step);
        }
        if self.held.is_held(KeyAction::MoveDown) {
            state.camera.adjust_height(-self.height_step);
        }
    }
}

fn log_mouse_button(button: MouseButton, pressed: bool) {
    let name = match button {
        MouseButton::Left => "Left",
        MouseButton::Middle => "Middle",
        MouseButton::Right => "Right",
        MouseButton::Other => {
            log::info!("Unhandled mouse button event");
            return;
        }
    };
    let action = if pressed { "pressed" } else { "released" };
    log::info!("{name} mouse button {action}");
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::ProjectionMode;

    fn setup() -> (InputDispatcher, SceneState) {
        let options = Options::default();
        (
            InputDispatcher::from_options(&options),
            SceneState::from_options(&options, (800, 600)),
        )
    }

    fn key(code: &str, pressed: bool, repeat: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
            repeat,
        }
    }

    #[test]
    fn first_pointer_sample_never_jumps() {
        let (mut input, mut state) = setup();
        let (yaw, pitch) = (state.camera.yaw(), state.camera.pitch());

        let _ = input.handle_event(InputEvent::CursorMoved { x: 9_000.0, y: -4_000.0 }, &mut state);
        let _ = input.handle_event(InputEvent::CursorMoved { x: 9_000.0, y: -4_000.0 }, &mut state);

        assert_eq!(state.camera.yaw(), yaw);
        assert_eq!(state.camera.pitch(), pitch);
    }

    #[test]
    fn pointer_up_looks_up() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 }, &mut state);
        let _ = input.handle_event(InputEvent::CursorMoved { x: 420.0, y: 250.0 }, &mut state);

        assert!((state.camera.yaw() - (-88.0)).abs() < 1e-4);
        assert!((state.camera.pitch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn locked_pointer_motion_matches_cursor_path() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(InputEvent::PointerMotion { dx: 20.0, dy: -50.0 }, &mut state);

        assert!((state.camera.yaw() - (-88.0)).abs() < 1e-4);
        assert!((state.camera.pitch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn raw_motion_keeps_turning_past_any_window_edge() {
        let (mut input, mut state) = setup();
        let start = state.camera.yaw();

        // 10 000 px of rightward motion, far wider than the window.
        for _ in 0..100 {
            let _ = input.handle_event(InputEvent::PointerMotion { dx: 100.0, dy: 0.0 }, &mut state);
        }

        let turned = state.camera.yaw() - start;
        assert!(turned > 360.0, "turned {turned} degrees");
        assert!((turned - 1_000.0).abs() < 1e-2);
    }

    #[test]
    fn toggle_fires_once_per_press() {
        let (mut input, mut state) = setup();
        assert_eq!(state.projection_mode, ProjectionMode::Perspective);

        let _ = input.handle_event(key("KeyP", true, false), &mut state);
        assert_eq!(state.projection_mode, ProjectionMode::Orthographic);

        // Held across many frames plus OS auto-repeat: no further toggles.
        for _ in 0..10 {
            input.apply_held_keys(&mut state, 0.016);
            let _ = input.handle_event(key("KeyP", true, true), &mut state);
        }
        assert_eq!(state.projection_mode, ProjectionMode::Orthographic);

        let _ = input.handle_event(key("KeyP", false, false), &mut state);
        let _ = input.handle_event(key("KeyP", true, false), &mut state);
        assert_eq!(state.projection_mode, ProjectionMode::Perspective);
    }

    #[test]
    fn even_number_of_presses_restores_mode() {
        let (mut input, mut state) = setup();
        for _ in 0..4 {
            let _ = input.handle_event(key("KeyP", true, false), &mut state);
            let _ = input.handle_event(key("KeyP", false, false), &mut state);
        }
        assert_eq!(state.projection_mode, ProjectionMode::Perspective);
    }

    #[test]
    fn held_forward_moves_by_speed_times_dt() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(key("KeyW", true, false), &mut state);

        input.apply_held_keys(&mut state, 0.4);
        // speed 2.5 * 0.4 s = 1 unit toward -Z
        assert!(state.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-4));

        let _ = input.handle_event(key("KeyW", false, false), &mut state);
        input.apply_held_keys(&mut state, 0.4);
        assert!(state.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-4));
    }

    #[test]
    fn opposite_keys_cancel() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(key("KeyA", true, false), &mut state);
        let _ = input.handle_event(key("KeyD", true, false), &mut state);
        input.apply_held_keys(&mut state, 1.0);
        assert!(state.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-4));
    }

    #[test]
    fn height_keys_step_per_frame() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(key("KeyQ", true, false), &mut state);
        for _ in 0..3 {
            input.apply_held_keys(&mut state, 0.5);
        }
        assert!((state.camera.position.y - 0.03).abs() < 1e-6);

        let _ = input.handle_event(key("KeyQ", false, false), &mut state);
        let _ = input.handle_event(key("KeyE", true, false), &mut state);
        input.apply_held_keys(&mut state, 0.5);
        assert!((state.camera.position.y - 0.02).abs() < 1e-6);
    }

    #[test]
    fn escape_requests_close_on_next_frame() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(key("Escape", true, false), &mut state);
        assert!(!state.should_close());
        input.apply_held_keys(&mut state, 0.016);
        assert!(state.should_close());
    }

    #[test]
    fn scroll_adjusts_speed_with_floor() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(InputEvent::Scroll { delta: 2.0 }, &mut state);
        assert!((state.camera.movement_speed() - 4.5).abs() < 1e-5);

        for _ in 0..20 {
            let _ = input.handle_event(InputEvent::Scroll { delta: -100.0 }, &mut state);
        }
        assert!((state.camera.movement_speed() - 0.1).abs() < 1e-6);
        assert_eq!(state.camera.zoom, 45.0);
    }

    #[test]
    fn mouse_buttons_do_not_change_state() {
        let (mut input, mut state) = setup();
        let before = state.camera.clone();
        for button in [MouseButton::Left, MouseButton::Middle, MouseButton::Right, MouseButton::Other] {
            assert!(!input.handle_event(InputEvent::MouseButton { button, pressed: true }, &mut state));
            assert!(!input.handle_event(InputEvent::MouseButton { button, pressed: false }, &mut state));
        }
        assert_eq!(state.camera, before);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let (mut input, mut state) = setup();
        assert!(!input.handle_event(key("KeyZ", true, false), &mut state));
    }

    #[test]
    fn resize_updates_aspect_and_ignores_zero() {
        let (mut input, mut state) = setup();
        assert!(input.handle_event(InputEvent::Resized { width: 1200, height: 600 }, &mut state));
        assert_eq!(state.viewport(), (1200, 600));
        assert!((state.aspect() - 2.0).abs() < 1e-6);

        assert!(!input.handle_event(InputEvent::Resized { width: 0, height: 600 }, &mut state));
        assert_eq!(state.viewport(), (1200, 600));
    }

    #[test]
    fn minimize_keeps_last_viewport() {
        let (mut input, mut state) = setup();
        assert!(!input.handle_event(InputEvent::Resized { width: 0, height: 0 }, &mut state));
        assert_eq!(state.viewport(), (800, 600));
        assert!((state.aspect() - 800.0 / 600.0).abs() < 1e-6);

        // Restoring to the same size is not a change either.
        assert!(!input.handle_event(InputEvent::Resized { width: 800, height: 600 }, &mut state));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let (mut input, mut state) = setup();
        let _ = input.handle_event(key("KeyW", true, false), &mut state);
        let _ = input.handle_event(InputEvent::FocusLost, &mut state);
        input.apply_held_keys(&mut state, 1.0);
        assert!(state.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-6));
    }

    #[test]
    fn rebound_toggle_key() {
        let mut options = Options::default();
        options.keybindings.toggle_projection = "KeyO".into();
        let mut input = InputDispatcher::from_options(&options);
        let mut state = SceneState::from_options(&options, (800, 600));

        let _ = input.handle_event(key("KeyP", true, false), &mut state);
        assert_eq!(state.projection_mode, ProjectionMode::Perspective);
        let _ = input.handle_event(key("KeyO", true, false), &mut state);
        assert_eq!(state.projection_mode, ProjectionMode::Orthographic);
    }
}
