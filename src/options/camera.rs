use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees (the camera "zoom").
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half-extent of the orthographic box on X and Y.
    pub ortho_half_extent: f32,
    /// Initial movement speed in world units per second.
    pub movement_speed: f32,
    /// Lowest speed scrolling can reach.
    pub min_movement_speed: f32,
    /// Degrees of yaw/pitch per pixel of pointer motion.
    pub mouse_sensitivity: f32,
    /// Height change per frame while an up/down key is held.
    pub height_step: f32,
    /// Eye position at startup.
    pub start_position: [f32; 3],
    /// Yaw at startup in degrees (-90 looks down -Z).
    pub start_yaw: f32,
    /// Pitch at startup in degrees.
    pub start_pitch: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            ortho_half_extent: 10.0,
            movement_speed: 2.5,
            min_movement_speed: 0.1,
            mouse_sensitivity: 0.1,
            height_step: 0.01,
            start_position: [0.0, 0.0, 3.0],
            start_yaw: -90.0,
            start_pitch: 0.0,
        }
    }
}
