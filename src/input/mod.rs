//! Input handling: event types, held-key state, pointer tracking and the
//! dispatcher that routes raw window events to the camera and scene state.
//!
//! Continuous actions (movement) are level-triggered and applied once per
//! frame from the held-key set. Discrete actions (projection toggle) are
//! edge-triggered and fire from the key event itself. The two paths never
//! share state beyond the held-key set.

/// Routes events into camera and scene state.
pub mod dispatcher;
/// Platform-agnostic input events.
pub mod event;
/// Bindable actions and the held-key set.
pub mod keyboard;
/// Absolute-to-relative pointer conversion.
pub mod pointer;

pub use dispatcher::InputDispatcher;
pub use event::{InputEvent, MouseButton};
pub use keyboard::{HeldKeys, KeyAction};
pub use pointer::PointerTracker;
