use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Phong lighting parameters for the lit pipeline and the lamp marker.
///
/// The scene has a white key light (also drawn as the lamp marker) and a
/// dim blue-green fill light.
pub struct LightingOptions {
    /// Key light color.
    pub light_color: [f32; 3],
    /// Key light world position; the lamp marker is drawn here.
    pub light_position: [f32; 3],
    /// Uniform scale of the lamp marker.
    pub lamp_scale: f32,
    /// Fill light color.
    pub ambient_color: [f32; 3],
    /// Fill light world position.
    pub ambient_position: [f32; 3],
    /// Multiplier on the key light color for the constant term.
    pub global_strength: f32,
    /// Multiplier on the fill light color for the constant term.
    pub ambient_strength: f32,
    /// Specular multiplier.
    pub specular_intensity: f32,
    /// Specular exponent.
    pub highlight_size: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_color: [1.0, 1.0, 1.0],
            light_position: [7.0, 3.0, 7.0],
            lamp_scale: 0.25,
            ambient_color: [0.0, 0.09, 0.13],
            ambient_position: [-5.0, 2.0, -5.0],
            global_strength: 0.5,
            ambient_strength: 1.7,
            specular_intensity: 0.8,
            highlight_size: 16.0,
        }
    }
}
