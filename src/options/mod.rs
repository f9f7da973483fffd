//! Viewer tuning options with TOML file support.
//!
//! Every tweakable constant (camera, lighting, textures, keybindings) lives
//! here. Defaults reproduce the scene exactly as designed; a TOML file only
//! needs the fields it overrides.

mod camera;
mod keybindings;
mod lighting;
mod textures;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};
pub use textures::TextureOptions;

use crate::error::NieblaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Texture location and tiling.
    pub textures: TextureOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NieblaError::OptionsParse`] if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, NieblaError> {
        toml::from_str(content).map_err(|e| NieblaError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NieblaError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, NieblaError> {
        let content = std::fs::read_to_string(path).map_err(NieblaError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load options from `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, NieblaError> {
        if path.is_file() {
            log::info!("Loading options from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`NieblaError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), NieblaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NieblaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NieblaError::Io)?;
        }
        std::fs::write(path, content).map_err(NieblaError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[lighting]
ambient_strength = 1.2

[keybindings]
toggle_projection = "KeyO"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.lighting.ambient_strength, 1.2);
        // Everything else should be default
        assert_eq!(opts.lighting.global_strength, 0.5);
        assert_eq!(opts.camera, CameraOptions::default());
        assert_eq!(opts.keybindings.move_forward, "KeyW");
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(opts.keybindings.lookup("KeyP"), None);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let result = Options::from_toml_str("[camera]\nfovy = \"wide\"\n");
        assert!(matches!(result, Err(NieblaError::OptionsParse(_))));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Close));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        assert_eq!(opts.keybindings.lookup("KeyE"), Some(KeyAction::MoveDown));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = Path::new("definitely/not/here/niebla.toml");
        assert_eq!(Options::load_or_default(path).unwrap(), Options::default());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("niebla-options-{}", std::process::id()));
        let path = dir.join("niebla.toml");
        let mut opts = Options::default();
        opts.camera.movement_speed = 4.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.movement_speed, 4.0);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
