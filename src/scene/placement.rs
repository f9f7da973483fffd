//! The fixed list of drawable objects and their transforms.

use glam::{Mat4, Quat, Vec3};

use super::mesh_data;
use crate::options::LightingOptions;

/// Mesh geometry available to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Countertop slab (also reused for the lamp marker).
    Base,
    /// Closed book.
    Book,
    /// Low-poly ball.
    Ball,
    /// Candle body.
    Candle,
    /// Candle topper.
    Topper,
    /// One cable segment.
    Cable,
}

impl MeshKind {
    /// Every mesh, in upload order.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::Book,
        Self::Ball,
        Self::Candle,
        Self::Topper,
        Self::Cable,
    ];

    /// Interleaved vertex rows: position, normal, uv.
    #[must_use]
    pub fn vertices(self) -> &'static [[f32; 8]] {
        match self {
            Self::Base => mesh_data::BASE,
            Self::Book => mesh_data::BOOK,
            Self::Ball => mesh_data::BALL,
            Self::Candle => mesh_data::CANDLE,
            Self::Topper => mesh_data::TOPPER,
            Self::Cable => mesh_data::CABLE,
        }
    }

    /// Number of vertices drawn for this mesh.
    #[must_use]
    pub fn vertex_count(self) -> u32 {
        self.vertices().len() as u32
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Textures available to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Countertop stone.
    Granite,
    /// Book cover.
    Book,
    /// Ball surface.
    Ball,
    /// Candle wax.
    Candle,
    /// Candle topper.
    Topper,
    /// Cable sleeve.
    Cable,
}

impl TextureKind {
    /// Every texture, in upload order.
    pub const ALL: [Self; 6] = [
        Self::Granite,
        Self::Book,
        Self::Ball,
        Self::Candle,
        Self::Topper,
        Self::Cable,
    ];

    /// File name inside the texture directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Granite => "T_granite.png",
            Self::Book => "T_Book.png",
            Self::Ball => "T_Ball.png",
            Self::Candle => "T_Candle.png",
            Self::Topper => "T_Topper.png",
            Self::Cable => "T_Cable.png",
        }
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Angle-axis rotation applied after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Angle in degrees.
    pub degrees: f32,
    /// Rotation axis; normalized when the matrix is built.
    pub axis: Vec3,
}

/// One drawable instance: mesh, texture and transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Geometry to draw.
    pub mesh: MeshKind,
    /// Texture bound while drawing.
    pub texture: TextureKind,
    /// World translation.
    pub position: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Optional rotation.
    pub rotation: Option<Rotation>,
}

impl Placement {
    /// `translate(position) * scale(scale) * rotate(rotation)`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let mut model = Mat4::from_translation(self.position) * Mat4::from_scale(self.scale);
        if let Some(rotation) = self.rotation {
            let axis = rotation.axis.normalize_or(Vec3::X);
            model *= Mat4::from_quat(Quat::from_axis_angle(axis, rotation.degrees.to_radians()));
        }
        model
    }
}

const fn placed(
    mesh: MeshKind,
    texture: TextureKind,
    position: [f32; 3],
    scale: [f32; 3],
    rotation: Option<Rotation>,
) -> Placement {
    Placement {
        mesh,
        texture,
        position: Vec3::from_array(position),
        scale: Vec3::from_array(scale),
        rotation,
    }
}

const fn quarter_turn(x: f32, y: f32, z: f32) -> Option<Rotation> {
    Some(Rotation {
        degrees: 90.0,
        axis: Vec3::new(x, y, z),
    })
}

/// The desk scene, in draw order.
pub const PLACEMENTS: [Placement; 8] = [
    placed(MeshKind::Base, TextureKind::Granite, [0.0, 0.0, 0.0], [2.0, 2.0, 2.0], None),
    placed(MeshKind::Book, TextureKind::Book, [0.0, 0.0, 4.0], [2.0, 2.0, 2.0], None),
    placed(MeshKind::Ball, TextureKind::Ball, [3.0, 0.1, -1.0], [0.25, 0.25, 0.25], None),
    placed(
        MeshKind::Candle,
        TextureKind::Candle,
        [-1.0, 0.1, -1.0],
        [1.0, 1.0, 1.0],
        quarter_turn(1.0, 0.0, 0.0),
    ),
    placed(
        MeshKind::Topper,
        TextureKind::Topper,
        [-1.0, 1.3, -1.0],
        [1.0, 1.0, 1.0],
        quarter_turn(1.0, 0.0, 0.0),
    ),
    placed(
        MeshKind::Cable,
        TextureKind::Cable,
        [-3.7, -0.2, 1.3],
        [0.85, 0.85, 0.85],
        quarter_turn(1.0, 0.05, 0.6),
    ),
    placed(
        MeshKind::Cable,
        TextureKind::Cable,
        [-3.7, -0.3, 1.3],
        [0.85, 0.87, 0.85],
        quarter_turn(1.0, 0.06, 0.3),
    ),
    placed(
        MeshKind::Cable,
        TextureKind::Cable,
        [-3.7, -0.4, 1.5],
        [0.85, 0.67, 0.85],
        quarter_turn(1.0, 0.07, 0.7),
    ),
];

/// Unlit marker drawn at the key light position with the base mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampMarker {
    /// World position (the key light position).
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl LampMarker {
    /// Geometry used for the marker.
    pub const MESH: MeshKind = MeshKind::Base;

    /// Marker at the configured key light.
    #[must_use]
    pub fn from_options(lighting: &LightingOptions) -> Self {
        Self {
            position: Vec3::from_array(lighting.light_position),
            scale: lighting.lamp_scale,
        }
    }

    /// `translate(position) * scale(scale)`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn vertex_counts_match_tables() {
        let counts: Vec<u32> = MeshKind::ALL.iter().map(|m| m.vertex_count()).collect();
        assert_eq!(counts, vec![6, 30, 72, 48, 72, 192]);
        for mesh in MeshKind::ALL {
            assert_eq!(mesh.vertex_count() % 3, 0, "{mesh:?} is not a triangle list");
        }
    }

    #[test]
    fn indices_follow_all_order() {
        for (i, mesh) in MeshKind::ALL.into_iter().enumerate() {
            assert_eq!(mesh.index(), i);
        }
        for (i, texture) in TextureKind::ALL.into_iter().enumerate() {
            assert_eq!(texture.index(), i);
        }
    }

    #[test]
    fn scene_draws_three_cable_segments() {
        let cables = PLACEMENTS.iter().filter(|p| p.mesh == MeshKind::Cable).count();
        assert_eq!(cables, 3);
        assert_eq!(PLACEMENTS[0].mesh, MeshKind::Base);
        assert_eq!(PLACEMENTS[0].texture, TextureKind::Granite);
    }

    #[test]
    fn unrotated_model_is_translate_times_scale() {
        let ball = PLACEMENTS[2];
        let p = ball.model_matrix() * Vec4::new(4.0, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(4.0, 0.1, -1.0, 1.0), 1e-5));
    }

    #[test]
    fn rotation_applies_before_scale_and_translation() {
        let candle = PLACEMENTS[3];
        // +Y rotates to +Z under a quarter turn about X, then translates.
        let p = candle.model_matrix() * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(-1.0, 0.1, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn rotation_axis_is_normalized() {
        let cable = PLACEMENTS[5];
        let model = cable.model_matrix();
        // Column lengths equal the scale factors only for a pure rotation.
        assert!((model.x_axis.truncate().length() - 0.85).abs() < 1e-4);
        assert!((model.y_axis.truncate().length() - 0.85).abs() < 1e-4);
    }

    #[test]
    fn lamp_sits_on_the_key_light() {
        let lamp = LampMarker::from_options(&LightingOptions::default());
        let origin = lamp.model_matrix() * Vec4::W;
        assert!(origin.abs_diff_eq(Vec4::new(7.0, 3.0, 7.0, 1.0), 1e-6));
        let corner = lamp.model_matrix() * Vec4::new(4.0, 0.0, 0.0, 1.0);
        assert!(corner.abs_diff_eq(Vec4::new(8.0, 3.0, 7.0, 1.0), 1e-6));
    }
}
