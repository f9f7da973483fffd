//! Scene state carried from frame to frame, plus the fixed object list.
//!
//! [`SceneState`] is the only mutable state in the viewer: camera,
//! projection mode, viewport, frame timing and the close flag. The
//! [`placement`] table and the mesh data are immutable.

pub(crate) mod mesh_data;
pub mod placement;

pub use placement::{LampMarker, MeshKind, Placement, Rotation, TextureKind, PLACEMENTS};

use crate::camera::{Camera, ProjectionMode};
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

/// Everything the viewer mutates between frames.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Fly camera.
    pub camera: Camera,
    /// Projection used for the next frame.
    pub projection_mode: ProjectionMode,
    /// Per-frame delta time and FPS.
    pub timing: FrameTiming,
    viewport: (u32, u32),
    should_close: bool,
}

impl SceneState {
    /// State with the given camera, perspective projection and an open
    /// window of `viewport` physical pixels.
    #[must_use]
    pub fn new(camera: Camera, viewport: (u32, u32)) -> Self {
        Self {
            camera,
            projection_mode: ProjectionMode::default(),
            timing: FrameTiming::new(),
            viewport: (viewport.0.max(1), viewport.1.max(1)),
            should_close: false,
        }
    }

    /// Startup state described by `options`.
    #[must_use]
    pub fn from_options(options: &Options, viewport: (u32, u32)) -> Self {
        Self::new(Camera::from_options(&options.camera), viewport)
    }

    /// Current drawable size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Width over height of the viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    /// Record a new viewport size. Zero-sized (minimized) windows are
    /// ignored. Returns `true` if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width, height) == self.viewport {
            return false;
        }
        self.viewport = (width, height);
        true
    }

    /// Switch between perspective and orthographic projection.
    pub fn toggle_projection(&mut self) {
        self.projection_mode = self.projection_mode.toggled();
    }

    /// Ask the viewer to exit after the current frame.
    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    /// Whether a close has been requested.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.should_close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_perspective_with_window_aspect() {
        let state = SceneState::from_options(&Options::default(), (800, 600));
        assert_eq!(state.projection_mode, ProjectionMode::Perspective);
        assert!((state.aspect() - 800.0 / 600.0).abs() < 1e-6);
        assert!(!state.should_close());
    }

    #[test]
    fn zero_sized_viewport_never_divides_by_zero() {
        let mut state = SceneState::new(Camera::default(), (0, 0));
        assert_eq!(state.viewport(), (1, 1));
        assert!(!state.resize(640, 0));
        assert!(state.aspect().is_finite());
    }

    #[test]
    fn close_flag_is_sticky() {
        let mut state = SceneState::new(Camera::default(), (800, 600));
        state.request_close();
        state.toggle_projection();
        assert!(state.should_close());
    }
}
