use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage, ShaderType,
};
use std::borrow::Cow;

use crate::error::PillarboxError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with `#import` support.
///
/// Pre-loads all shared WGSL modules at construction time. Consuming shaders use
/// `#import pillarbox::module_name` to pull in shared code. The composer produces
/// `naga::Module` IR directly, skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

impl ShaderComposer {
    /// Build a composer with all shared modules registered.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, PillarboxError> {
        let mut composer = Composer::default();

        // Register shared modules in dependency order.
        // Modules with no dependencies first, then modules that depend on earlier ones.
        let modules: &[ModuleDef] = &[ModuleDef {
            source: include_str!("../../assets/shaders/modules/palette.wgsl"),
            file_path: "modules/palette.wgsl",
        }];

        for m in modules {
            if let Err(e) = composer.add_composable_module(ComposableModuleDescriptor {
                source: m.source,
                file_path: m.file_path,
                language: ShaderLanguage::Wgsl,
                ..Default::default()
            }) {
                return Err(PillarboxError::Shader(format!(
                    "failed to register shader module '{}': {e}",
                    m.file_path
                )));
            }
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` directives)
    /// into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Shader`] if composition or validation fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, PillarboxError> {
        let naga_module = self
            .composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                PillarboxError::Shader(format!("failed to compose shader '{file_path}': {e}"))
            })?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu shader module.
    /// Useful for testing shader composition without a GPU device.
    ///
    /// # Errors
    ///
    /// Returns the underlying composer error on parse or validation failure.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, Box<naga_oil::compose::ComposerError>> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shader source definitions for all composable shaders in the project.
    /// Each entry is (source, file_path).
    fn all_shader_sources() -> Vec<(&'static str, &'static str)> {
        vec![(
            include_str!("../../assets/shaders/pillar_field.wgsl"),
            "pillar_field.wgsl",
        )]
    }

    #[test]
    fn test_all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        for (source, file_path) in all_shader_sources() {
            if let Err(e) = composer.compose_naga(source, file_path) {
                panic!("Shader '{file_path}' failed to compose: {e}");
            }
        }
    }

    #[test]
    fn composed_field_shader_has_both_entry_points() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer
            .compose_naga(
                include_str!("../../assets/shaders/pillar_field.wgsl"),
                "pillar_field.wgsl",
            )
            .unwrap();
        let names: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(names.contains(&"vs_main"));
        assert!(names.contains(&"fs_main"));
    }
}
