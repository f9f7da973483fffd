//! GPU-free description of one frame: matrices and the ordered draw list.

use glam::{Mat4, Vec3};

use crate::camera::Projection;
use crate::scene::{LampMarker, MeshKind, Placement, SceneState, TextureKind};

/// Which pipeline a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    /// Textured Phong shading.
    Lit,
    /// Unlit white marker.
    Lamp,
}

/// One non-indexed triangle-list draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Pipeline bound for this draw.
    pub pipeline: PipelineKind,
    /// Vertex buffer to draw from.
    pub mesh: MeshKind,
    /// Texture bound at group 2 (lit draws only).
    pub texture: Option<TextureKind>,
    /// Object-to-world matrix, written to this draw's uniform slot.
    pub model: Mat4,
    /// Vertices drawn.
    pub vertex_count: u32,
}

/// Everything the renderer needs to record one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// World to view.
    pub view: Mat4,
    /// View to clip for the current projection mode.
    pub projection: Mat4,
    /// Eye position for specular lighting.
    pub camera_position: Vec3,
    /// Placements in list order, then the lamp marker.
    pub draws: Vec<DrawCall>,
}

impl FramePlan {
    /// Plan a frame from the current scene state.
    #[must_use]
    pub fn build(
        state: &SceneState,
        projection: &Projection,
        placements: &[Placement],
        lamp: &LampMarker,
    ) -> Self {
        let camera = &state.camera;
        let mut draws: Vec<DrawCall> = placements
            .iter()
            .map(|p| DrawCall {
                pipeline: PipelineKind::Lit,
                mesh: p.mesh,
                texture: Some(p.texture),
                model: p.model_matrix(),
                vertex_count: p.mesh.vertex_count(),
            })
            .collect();
        draws.push(DrawCall {
            pipeline: PipelineKind::Lamp,
            mesh: LampMarker::MESH,
            texture: None,
            model: lamp.model_matrix(),
            vertex_count: LampMarker::MESH.vertex_count(),
        });

        Self {
            view: camera.view_matrix(),
            projection: projection.matrix(state.projection_mode, camera.zoom, state.aspect()),
            camera_position: camera.position,
            draws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ProjectionMode;
    use crate::options::Options;
    use crate::scene::PLACEMENTS;

    fn plan_for(state: &SceneState) -> FramePlan {
        let options = Options::default();
        FramePlan::build(
            state,
            &Projection::from_options(&options.camera),
            &PLACEMENTS,
            &LampMarker::from_options(&options.lighting),
        )
    }

    fn default_state() -> SceneState {
        SceneState::from_options(&Options::default(), (800, 600))
    }

    #[test]
    fn placements_first_then_lamp() {
        let plan = plan_for(&default_state());
        assert_eq!(plan.draws.len(), PLACEMENTS.len() + 1);

        for (draw, placement) in plan.draws.iter().zip(PLACEMENTS.iter()) {
            assert_eq!(draw.pipeline, PipelineKind::Lit);
            assert_eq!(draw.mesh, placement.mesh);
            assert_eq!(draw.texture, Some(placement.texture));
            assert_eq!(draw.model, placement.model_matrix());
            assert_eq!(draw.vertex_count, placement.mesh.vertex_count());
        }

        let lamp = plan.draws.last().unwrap();
        assert_eq!(lamp.pipeline, PipelineKind::Lamp);
        assert_eq!(lamp.mesh, MeshKind::Base);
        assert_eq!(lamp.texture, None);
        assert_eq!(lamp.vertex_count, 6);
    }

    #[test]
    fn lit_draws_are_contiguous() {
        let plan = plan_for(&default_state());
        let switches = plan
            .draws
            .windows(2)
            .filter(|pair| pair[0].pipeline != pair[1].pipeline)
            .count();
        assert_eq!(switches, 1);
    }

    #[test]
    fn projection_follows_mode_and_viewport() {
        let mut state = default_state();
        let perspective = plan_for(&state).projection;
        let expected = Mat4::perspective_rh(45f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        assert!(perspective.abs_diff_eq(expected, 1e-6));

        state.toggle_projection();
        assert_eq!(state.projection_mode, ProjectionMode::Orthographic);
        let ortho = plan_for(&state).projection;
        let expected = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
        assert!(ortho.abs_diff_eq(expected, 1e-6));

        state.toggle_projection();
        let _ = state.resize(1000, 500);
        let wide = plan_for(&state).projection;
        let expected = Mat4::perspective_rh(45f32.to_radians(), 2.0, 0.1, 100.0);
        assert!(wide.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn view_tracks_camera() {
        let mut state = default_state();
        state.camera.adjust_height(1.0);
        let plan = plan_for(&state);
        assert_eq!(plan.view, state.camera.view_matrix());
        assert!(plan.camera_position.abs_diff_eq(Vec3::new(0.0, 1.0, 3.0), 1e-6));
    }
}
