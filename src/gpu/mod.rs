//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, mesh and texture upload,
//! uniform layouts and shader composition.

/// Vertex layout and vertex buffer upload.
pub mod mesh;
/// Shared wgpu boilerplate helpers for the scene pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Texture decoding, upload and depth target.
pub mod texture;
/// Uniform buffer layouts shared with the shaders.
pub mod uniforms;
