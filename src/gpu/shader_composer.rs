use std::borrow::Cow;
use std::fmt;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, ComposerError, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

/// Lit pipeline shader source.
pub const LIT_SHADER: &str = include_str!("../../assets/shaders/lit.wgsl");
/// Lamp marker shader source.
pub const LAMP_SHADER: &str = include_str!("../../assets/shaders/lamp.wgsl");

/// Failure while composing or compiling WGSL.
#[derive(Debug)]
pub enum ShaderError {
    /// A shared module could not be registered with the composer.
    Module {
        /// File path of the module.
        file_path: &'static str,
        /// Underlying composer error.
        source: Box<ComposerError>,
    },
    /// A top-level shader failed to compose.
    Compose {
        /// File path of the shader.
        file_path: String,
        /// Underlying composer error.
        source: Box<ComposerError>,
    },
    /// wgpu rejected the composed module.
    Validation {
        /// Shader label.
        label: String,
        /// Validation message reported by wgpu.
        message: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module { file_path, source } => {
                write!(f, "failed to register shader module '{file_path}': {source}")
            }
            Self::Compose { file_path, source } => {
                write!(f, "failed to compose shader '{file_path}': {source}")
            }
            Self::Validation { label, message } => {
                write!(f, "shader '{label}' failed validation: {message}")
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Module { source, .. } | Self::Compose { source, .. } => Some(source.as_ref()),
            Self::Validation { .. } => None,
        }
    }
}

/// Wraps `naga_oil::compose::Composer` to provide shader composition with `#import` support.
///
/// Pre-loads the shared `niebla::frame` module at construction time.
/// Consuming shaders use `#import niebla::frame::{...}` to pull in the
/// uniform layouts. The composer produces `naga::Module` IR directly,
/// skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition.
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

impl ShaderComposer {
    /// Build a composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::Module`] if a shared module fails to parse.
    pub fn new() -> Result<Self, ShaderError> {
        let mut composer = Composer::default();

        // Register shared modules in dependency order.
        let modules: &[ModuleDef] = &[ModuleDef {
            source: include_str!("../../assets/shaders/frame.wgsl"),
            file_path: "frame.wgsl",
        }];

        for m in modules {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| ShaderError::Module {
                    file_path: m.file_path,
                    source: Box::new(e),
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` directives)
    /// into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError`] if composition fails or wgpu rejects the
    /// resulting module.
    pub async fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, ShaderError> {
        let naga_module = self.compose_naga(source, file_path)?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        });
        if let Some(error) = device.pop_error_scope().await {
            return Err(ShaderError::Validation {
                label: label.to_owned(),
                message: error.to_string(),
            });
        }
        Ok(module)
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu shader module.
    /// Useful for testing shader composition without a GPU device.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::Compose`] if an import is missing or the
    /// source does not parse.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, ShaderError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| ShaderError::Compose {
                file_path: file_path.to_owned(),
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        for (source, file_path) in [(LIT_SHADER, "lit.wgsl"), (LAMP_SHADER, "lamp.wgsl")] {
            let module = composer
                .compose_naga(source, file_path)
                .unwrap_or_else(|e| panic!("Shader '{file_path}' failed to compose: {e}"));
            let entry_points: Vec<&str> =
                module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
            assert!(entry_points.contains(&"vs_main"), "{file_path}: {entry_points:?}");
            assert!(entry_points.contains(&"fs_main"), "{file_path}: {entry_points:?}");
        }
    }

    #[test]
    fn composed_shaders_validate() {
        let mut composer = ShaderComposer::new().unwrap();
        for (source, file_path) in [(LIT_SHADER, "lit.wgsl"), (LAMP_SHADER, "lamp.wgsl")] {
            let module = composer.compose_naga(source, file_path).unwrap();
            let _ = naga::valid::Validator::new(
                naga::valid::ValidationFlags::all(),
                naga::valid::Capabilities::empty(),
            )
            .validate(&module)
            .unwrap_or_else(|e| panic!("Shader '{file_path}' failed validation: {e:?}"));
        }
    }

    #[test]
    fn missing_import_is_an_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let source = "#import niebla::nowhere::Thing\n\
            @fragment fn fs_main() -> @location(0) vec4<f32> {\n\
                let t: Thing = Thing();\n\
                return vec4<f32>(t.value);\n\
            }";
        let err = composer.compose_naga(source, "broken.wgsl").unwrap_err();
        assert!(matches!(err, ShaderError::Compose { .. }));
        assert!(err.to_string().contains("broken.wgsl"));
    }

    #[test]
    fn malformed_wgsl_is_a_compose_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let source = "@fragment fn fs_main() -> @location(0) vec4<f32> { return ; ";
        let err = composer.compose_naga(source, "torn.wgsl").unwrap_err();
        assert!(matches!(&err, ShaderError::Compose { file_path, .. } if file_path == "torn.wgsl"));
    }
}
