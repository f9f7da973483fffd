//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::gpu::shader_composer::ShaderError;
use crate::gpu::texture::TextureError;

/// Errors produced by the niebla crate.
///
/// All of them are startup failures; once the frame loop runs nothing in
/// the crate returns an error.
#[derive(Debug)]
pub enum NieblaError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// A required texture could not be loaded.
    Texture(TextureError),
    /// A shader failed to compose or validate.
    Shader(ShaderError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Window or event-loop failure.
    Viewer(String),
}

impl fmt::Display for NieblaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Texture(e) => write!(f, "texture error: {e}"),
            Self::Shader(e) => write!(f, "shader error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for NieblaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Texture(e) => Some(e),
            Self::Shader(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<RenderContextError> for NieblaError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<TextureError> for NieblaError {
    fn from(e: TextureError) -> Self {
        Self::Texture(e)
    }
}

impl From<ShaderError> for NieblaError {
    fn from(e: ShaderError) -> Self {
        Self::Shader(e)
    }
}

impl From<std::io::Error> for NieblaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
