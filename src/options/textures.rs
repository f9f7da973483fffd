use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Where scene textures live and how they are tiled.
pub struct TextureOptions {
    /// Directory holding the `T_*.png` files. Relative paths are tried
    /// against the executable's directory first, then the working
    /// directory.
    pub directory: PathBuf,
    /// Texture coordinate multiplier applied to every lit object.
    pub uv_scale: [f32; 2],
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("assets/textures"),
            uv_scale: [2.5, 2.5],
        }
    }
}
