//! The scene engine: GPU context, renderer, scene state and input routing
//! behind one handle the viewer drives.

use std::path::{Path, PathBuf};

use crate::camera::Projection;
use crate::error::NieblaError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DecodedImage;
use crate::input::{InputDispatcher, InputEvent};
use crate::options::Options;
use crate::renderer::{FramePlan, FrameRenderer};
use crate::scene::{LampMarker, SceneState, PLACEMENTS};

/// Owns everything needed to run the desk scene in a window.
///
/// # Frame loop
///
/// ```ignore
/// // per window event
/// let _ = engine.handle_input(event);
///
/// // per redraw
/// engine.update();
/// engine.render()?;
/// if engine.should_close() { /* exit */ }
/// ```
pub struct SceneEngine {
    context: RenderContext,
    renderer: FrameRenderer,
    state: SceneState,
    input: InputDispatcher,
    projection: Projection,
    lamp: LampMarker,
}

impl SceneEngine {
    /// Initialize the GPU, compose shaders and upload meshes and textures.
    ///
    /// # Errors
    ///
    /// Any startup failure: GPU context, shader composition or a texture
    /// that is missing, undecodable or not RGB/RGBA.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        options: &Options,
    ) -> Result<Self, NieblaError> {
        let context = RenderContext::new(window, initial_size).await?;

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let texture_dir = &options.textures.directory;
        let renderer = FrameRenderer::new(&context, options, |kind| {
            let path = resolve_asset_path(texture_dir, kind.file_name(), exe_dir.as_deref());
            DecodedImage::decode_file(&path).inspect_err(|e| {
                log::error!("Failed to load {}: {e}", path.display());
            })
        })
        .await?;

        let state = SceneState::from_options(options, context.size());
        log::info!(
            "Scene ready: {} objects, camera at {}",
            PLACEMENTS.len(),
            state.camera.position
        );

        Ok(Self {
            context,
            renderer,
            state,
            input: InputDispatcher::from_options(options),
            projection: Projection::from_options(&options.camera),
            lamp: LampMarker::from_options(&options.lighting),
        })
    }

    /// Route one window event. Returns `true` if it changed any state.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if let InputEvent::Resized { width, height } = event {
            self.resize_surface(width, height);
        }
        self.input.handle_event(event, &mut self.state)
    }

    /// Advance frame timing and apply held keys. Returns the frame's delta
    /// time in seconds.
    pub fn update(&mut self) -> f32 {
        let dt = self.state.timing.tick();
        if let Some(fps) = self.state.timing.take_fps_report() {
            log::debug!("{fps:.1} fps");
        }
        self.input.apply_held_keys(&mut self.state, dt);
        dt
    }

    /// Draw list and matrices for the current state.
    #[must_use]
    pub fn frame_plan(&self) -> FramePlan {
        FramePlan::build(&self.state, &self.projection, &PLACEMENTS, &self.lamp)
    }

    /// Render and present one frame.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] if the swapchain texture could
    /// not be acquired. The caller decides whether to reconfigure.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let plan = self.frame_plan();
        self.renderer.render(&self.context, &plan)
    }

    /// Re-apply the surface configuration after it was lost or outdated.
    pub fn reconfigure_surface(&self) {
        self.context.reconfigure();
    }

    /// Forget the pointer baseline (after a cursor re-grab).
    pub fn reset_pointer(&mut self) {
        self.input.reset_pointer();
    }

    /// Whether the user asked to close the window.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.state.should_close()
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
    }
}

/// Locate `file` inside `dir`.
///
/// Absolute directories are used as-is. Relative ones are tried next to
/// the executable first, then against the working directory.
#[must_use]
pub fn resolve_asset_path(dir: &Path, file: &str, exe_dir: Option<&Path>) -> PathBuf {
    let relative = dir.join(file);
    if relative.is_absolute() {
        return relative;
    }
    if let Some(beside_exe) = exe_dir.map(|exe| exe.join(&relative)) {
        if beside_exe.is_file() {
            return beside_exe;
        }
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_directory_is_untouched() {
        let dir = std::env::temp_dir();
        let resolved = resolve_asset_path(&dir, "T_Ball.png", Some(Path::new("/opt/niebla")));
        assert_eq!(resolved, dir.join("T_Ball.png"));
    }

    #[test]
    fn prefers_file_next_to_executable() {
        let exe_dir = std::env::temp_dir().join(format!("niebla-assets-{}", std::process::id()));
        let textures = exe_dir.join("assets/textures");
        std::fs::create_dir_all(&textures).unwrap();
        std::fs::write(textures.join("T_Book.png"), b"png").unwrap();

        let resolved =
            resolve_asset_path(Path::new("assets/textures"), "T_Book.png", Some(&exe_dir));
        assert_eq!(resolved, textures.join("T_Book.png"));

        // Not next to the executable: fall back to the working directory.
        let resolved =
            resolve_asset_path(Path::new("assets/textures"), "T_Cable.png", Some(&exe_dir));
        assert_eq!(resolved, Path::new("assets/textures/T_Cable.png"));

        std::fs::remove_dir_all(&exe_dir).unwrap();
    }

    #[test]
    fn no_executable_dir_uses_working_directory() {
        let resolved = resolve_asset_path(Path::new("assets/textures"), "T_Candle.png", None);
        assert_eq!(resolved, Path::new("assets/textures/T_Candle.png"));
    }
}
