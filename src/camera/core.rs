use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Pitch is kept inside `±PITCH_LIMIT` degrees so the front vector never
/// lines up with world up.
pub const PITCH_LIMIT: f32 = 89.0;

/// Direction of a keyboard-driven camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the horizontal projection of the front vector.
    Forward,
    /// Against the horizontal projection of the front vector.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
}

/// First-person camera oriented by yaw and pitch angles.
///
/// The basis vectors are always recomputed from the angles, never
/// integrated, so repeated input cannot accumulate drift.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    movement_speed: f32,
    min_movement_speed: f32,
    mouse_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Create a camera at `position` looking along the given yaw/pitch
    /// (degrees), with default speed, sensitivity and field of view.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let options = CameraOptions {
            start_position: position.to_array(),
            start_yaw: yaw,
            start_pitch: pitch,
            ..CameraOptions::default()
        };
        Self::from_options(&options)
    }

    /// Build the startup camera described by `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(options.start_position),
            yaw: options.start_yaw,
            pitch: options.start_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
            zoom: options.fovy,
            movement_speed: options.movement_speed.max(options.min_movement_speed),
            min_movement_speed: options.min_movement_speed,
            mouse_sensitivity: options.mouse_sensitivity,
        };
        camera.update_vectors();
        camera
    }

    /// Horizontal look angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical look angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector (camera-relative, not world up).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current movement speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Move by `distance` world units in `direction`.
    ///
    /// Forward/backward follow the front vector flattened onto the XZ
    /// plane, so looking up or down never changes height.
    pub fn process_keyboard_movement(
        &mut self,
        direction: MoveDirection,
        distance: f32,
    ) {
        let forward = Vec3::new(self.front.x, 0.0, self.front.z).normalize_or_zero();
        let offset = match direction {
            MoveDirection::Forward => forward,
            MoveDirection::Backward => -forward,
            MoveDirection::Left => -self.right,
            MoveDirection::Right => self.right,
        };
        self.position += offset * distance;
    }

    /// Raise (positive) or lower (negative) the camera along world Y.
    pub fn adjust_height(&mut self, delta: f32) {
        self.position.y += delta;
    }

    /// Rotate by a pointer delta in pixels.
    ///
    /// `dy` must already be flipped so that positive means "look up".
    pub fn process_pointer_delta(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Add `delta` to the movement speed, never going below the floor.
    pub fn adjust_movement_speed(&mut self, delta: f32) {
        self.movement_speed = (self.movement_speed + delta).max(self.min_movement_speed);
    }

    /// Right-handed look-at matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4Swizzles;

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn starts_facing_negative_z() {
        let camera = Camera::default();
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), EPS));
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn forward_step_moves_toward_negative_z() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0);
        camera.process_keyboard_movement(MoveDirection::Forward, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPS));
    }

    #[test]
    fn strafe_and_back_use_right_and_front() {
        let mut camera = Camera::default();
        camera.process_keyboard_movement(MoveDirection::Right, 2.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(2.0, 0.0, 3.0), EPS));
        camera.process_keyboard_movement(MoveDirection::Left, 2.0);
        camera.process_keyboard_movement(MoveDirection::Backward, 1.5);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 4.5), EPS));
    }

    #[test]
    fn forward_while_pitched_keeps_height() {
        let mut camera = Camera::default();
        camera.process_pointer_delta(0.0, 800.0, true);
        assert!(camera.front().y > 0.9);

        camera.process_keyboard_movement(MoveDirection::Forward, 3.0);
        assert!(camera.position.y.abs() < EPS);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn adjust_height_touches_only_y() {
        let mut camera = Camera::default();
        camera.adjust_height(0.01);
        camera.adjust_height(0.01);
        camera.adjust_height(-0.005);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.015, 3.0), 1e-6));
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn zero_pointer_delta_is_a_no_op() {
        let mut camera = Camera::default();
        camera.process_pointer_delta(37.0, -12.0, true);
        let (yaw, pitch, front) = (camera.yaw(), camera.pitch(), camera.front());

        camera.process_pointer_delta(0.0, 0.0, true);
        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
        assert!(camera.front().abs_diff_eq(front, 1e-6));
    }

    #[test]
    fn pointer_delta_scales_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_pointer_delta(10.0, 5.0, true);
        assert!((camera.yaw() - (-89.0)).abs() < EPS);
        assert!((camera.pitch() - 0.5).abs() < EPS);
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_pointer_delta(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        camera.process_pointer_delta(0.0, -20_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_pointer_delta(0.0, 1_000.0, false);
        assert!((camera.pitch() - 100.0).abs() < EPS);
    }

    #[test]
    fn movement_speed_never_drops_below_floor() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.adjust_movement_speed(-1_000.0);
            assert!(camera.movement_speed() >= 0.1);
        }
        assert!((camera.movement_speed() - 0.1).abs() < 1e-6);

        camera.adjust_movement_speed(1.0);
        assert!((camera.movement_speed() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn view_matrix_is_orthonormal_for_all_orientations() {
        let mut yaw = -180.0_f32;
        while yaw <= 180.0 {
            let mut pitch = -88.9_f32;
            while pitch <= 88.9 {
                let camera = Camera::new(Vec3::new(1.0, -2.0, 5.0), yaw, pitch);
                assert_orthonormal_look_at(&camera);
                pitch += 7.7;
            }
            yaw += 15.0;
        }
    }

    fn assert_orthonormal_look_at(camera: &Camera) {
        let (front, right, up) = (camera.front(), camera.right(), camera.up());
        for axis in [front, right, up] {
            assert!((axis.length() - 1.0).abs() < EPS);
        }
        assert!(front.dot(right).abs() < EPS);
        assert!(front.dot(up).abs() < EPS);
        assert!(right.dot(up).abs() < EPS);

        let view = camera.view_matrix();
        let rotation = glam::Mat3::from_mat4(view);
        let product = rotation * rotation.transpose();
        assert!(product.abs_diff_eq(glam::Mat3::IDENTITY, EPS));
        assert!((rotation.determinant() - 1.0).abs() < EPS);

        // The eye maps to the origin and the look target onto -Z.
        let eye = view * camera.position.extend(1.0);
        assert!(eye.xyz().abs_diff_eq(Vec3::ZERO, 1e-3));
        let target = view * (camera.position + front).extend(1.0);
        assert!(target.xyz().abs_diff_eq(Vec3::NEG_Z, 1e-3));
    }
}
