//! CPU-side mirrors of the WGSL uniform structs in `frame.wgsl`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::options::{LightingOptions, TextureOptions};

/// Per-frame uniform, bound at `@group(0)` by both pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniform {
    /// World to view.
    pub view: [[f32; 4]; 4],
    /// View to clip.
    pub projection: [[f32; 4]; 4],
    /// Eye position (w unused).
    pub view_position: [f32; 4],
    /// Key light color (w unused).
    pub light_color: [f32; 4],
    /// Key light position (w unused).
    pub light_position: [f32; 4],
    /// Fill light color (w unused).
    pub ambient_color: [f32; 4],
    /// Fill light position (w unused).
    pub ambient_position: [f32; 4],
    /// Texture coordinate multiplier.
    pub uv_scale: [f32; 2],
    /// Key light constant term multiplier.
    pub global_strength: f32,
    /// Fill light constant term multiplier.
    pub ambient_strength: f32,
    /// Specular multiplier.
    pub specular_intensity: f32,
    /// Specular exponent.
    pub highlight_size: f32,
    /// Pads the struct to a multiple of 16 bytes.
    pub _pad: [f32; 2],
}

impl FrameUniform {
    /// Build from the frame matrices and the static lighting setup.
    #[must_use]
    pub fn new(
        view: Mat4,
        projection: Mat4,
        camera_position: Vec3,
        lighting: &LightingOptions,
        textures: &TextureOptions,
    ) -> Self {
        let extend = |v: [f32; 3]| Vec3::from_array(v).extend(1.0).to_array();
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_position: camera_position.extend(1.0).to_array(),
            light_color: extend(lighting.light_color),
            light_position: extend(lighting.light_position),
            ambient_color: extend(lighting.ambient_color),
            ambient_position: extend(lighting.ambient_position),
            uv_scale: textures.uv_scale,
            global_strength: lighting.global_strength,
            ambient_strength: lighting.ambient_strength,
            specular_intensity: lighting.specular_intensity,
            highlight_size: lighting.highlight_size,
            _pad: [0.0; 2],
        }
    }
}

/// Per-object uniform, one slot per draw, bound at `@group(1)` with a
/// dynamic offset.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    /// Object to world.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `model` for normals.
    pub normal_matrix: [[f32; 4]; 4],
}

impl ModelUniform {
    /// Slot data for a model matrix. A singular model falls back to the
    /// model itself for normals.
    #[must_use]
    pub fn new(model: Mat4) -> Self {
        let normal = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            model
        };
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: normal.to_cols_array_2d(),
        }
    }

    /// Distance between consecutive slots for the given device alignment.
    #[must_use]
    pub fn slot_stride(alignment: u32) -> u64 {
        let size = size_of::<Self>() as u64;
        let alignment = u64::from(alignment.max(1));
        size.div_ceil(alignment) * alignment
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn sizes_match_wgsl_layout() {
        assert_eq!(size_of::<FrameUniform>(), 240);
        assert_eq!(size_of::<FrameUniform>() % 16, 0);
        assert_eq!(size_of::<ModelUniform>(), 128);
    }

    #[test]
    fn frame_uniform_carries_lighting_defaults() {
        let u = FrameUniform::new(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Vec3::new(0.0, 0.0, 3.0),
            &LightingOptions::default(),
            &TextureOptions::default(),
        );
        assert_eq!(u.light_position, [7.0, 3.0, 7.0, 1.0]);
        assert_eq!(u.ambient_color, [0.0, 0.09, 0.13, 1.0]);
        assert_eq!(u.uv_scale, [2.5, 2.5]);
        assert_eq!(u.global_strength, 0.5);
        assert_eq!(u.ambient_strength, 1.7);
        assert_eq!(u.view_position, [0.0, 0.0, 3.0, 1.0]);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let u = ModelUniform::new(model);
        let normal = Mat4::from_cols_array_2d(&u.normal_matrix) * Vec4::new(1.0, 1.0, 0.0, 0.0);
        assert!(normal.abs_diff_eq(Vec4::new(0.5, 1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn slot_stride_rounds_up_to_alignment() {
        assert_eq!(ModelUniform::slot_stride(256), 256);
        assert_eq!(ModelUniform::slot_stride(64), 128);
        assert_eq!(ModelUniform::slot_stride(0), 128);
    }
}
