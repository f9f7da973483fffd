use glam::Mat4;

use crate::options::CameraOptions;

/// Which projection the renderer uses this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective frustum using the camera zoom as field of view.
    #[default]
    Perspective,
    /// Fixed-size orthographic box.
    Orthographic,
}

impl ProjectionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Clip-plane and box parameters shared by both projection modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half-width and half-height of the orthographic box.
    pub ortho_half_extent: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Projection {
    /// Take the clip parameters out of the camera options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            znear: options.znear,
            zfar: options.zfar,
            ortho_half_extent: options.ortho_half_extent,
        }
    }

    /// Build the projection matrix for `mode`.
    ///
    /// `fovy` is in degrees and only used in perspective mode. Both
    /// matrices map depth to `[0, 1]` (wgpu/Vulkan convention).
    #[must_use]
    pub fn matrix(&self, mode: ProjectionMode, fovy: f32, aspect: f32) -> Mat4 {
        match mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(fovy.to_radians(), aspect, self.znear, self.zfar)
            }
            ProjectionMode::Orthographic => {
                let h = self.ortho_half_extent;
                Mat4::orthographic_rh(-h, h, -h, h, self.znear, self.zfar)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        let mode = ProjectionMode::default();
        assert_eq!(mode, ProjectionMode::Perspective);
        assert_eq!(mode.toggled(), ProjectionMode::Orthographic);
        assert_eq!(mode.toggled().toggled(), ProjectionMode::Perspective);
    }

    #[test]
    fn perspective_matches_closed_form() {
        let (fovy, aspect, near, far) = (45.0_f32, 800.0_f32 / 600.0, 0.1_f32, 100.0_f32);
        let f = 1.0 / (fovy.to_radians() / 2.0).tan();
        let expected = Mat4::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, far / (near - far), -1.0),
            Vec4::new(0.0, 0.0, near * far / (near - far), 0.0),
        );

        let actual = Projection::default().matrix(ProjectionMode::Perspective, fovy, aspect);
        assert!(actual.abs_diff_eq(expected, 1e-5), "{actual:?} != {expected:?}");
    }

    #[test]
    fn orthographic_matches_closed_form() {
        let (l, r, b, t, near, far) = (-10.0_f32, 10.0_f32, -10.0_f32, 10.0_f32, 0.1_f32, 100.0_f32);
        let expected = Mat4::from_cols(
            Vec4::new(2.0 / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / (t - b), 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0 / (near - far), 0.0),
            Vec4::new(-(r + l) / (r - l), -(t + b) / (t - b), near / (near - far), 1.0),
        );

        // Field of view and aspect have no effect on the orthographic box.
        let actual = Projection::default().matrix(ProjectionMode::Orthographic, 45.0, 4.0 / 3.0);
        assert!(actual.abs_diff_eq(expected, 1e-6), "{actual:?} != {expected:?}");
        let other = Projection::default().matrix(ProjectionMode::Orthographic, 90.0, 2.0);
        assert_eq!(actual, other);
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let proj = Projection::default().matrix(ProjectionMode::Perspective, 45.0, 1.0);
        let near = proj * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }
}
