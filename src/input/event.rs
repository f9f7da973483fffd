/// Platform-agnostic input events.
///
/// The viewer translates winit events into these and hands them to an
/// [`InputDispatcher`](super::InputDispatcher).
///
/// # Example
///
/// ```
/// # use niebla::{InputDispatcher, InputEvent, Options, SceneState};
/// let options = Options::default();
/// let mut state = SceneState::from_options(&options, (800, 600));
/// let mut input = InputDispatcher::from_options(&options);
/// let _ = input.handle_event(InputEvent::Scroll { delta: 1.0 }, &mut state);
/// assert_eq!(state.camera.movement_speed(), 3.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Relative motion from a locked pointer. Already a delta, so it skips
    /// the pointer tracker.
    PointerMotion {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels (grows downward).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Vertical scroll in line units (positive = away from the user).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
    /// Physical key changed state.
    Key {
        /// Key code in `winit::keyboard::KeyCode` debug format, e.g. `"KeyW"`.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// OS auto-repeat of a key that is already down.
        repeat: bool,
    },
    /// Drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Window lost keyboard focus; held keys will never see their release.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra).
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}
