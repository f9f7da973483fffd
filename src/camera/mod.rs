//! Camera system for first-person scene viewing.
//!
//! Provides a yaw/pitch fly camera and the perspective/orthographic
//! projection selection used by the frame renderer.

/// Fly camera: position, yaw/pitch orientation and derived basis.
pub mod core;
/// Projection mode and projection matrix construction.
pub mod projection;

pub use self::core::{Camera, MoveDirection};
pub use projection::{Projection, ProjectionMode};
