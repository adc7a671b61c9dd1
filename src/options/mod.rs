//! Centralized scene/display options with TOML preset support.
//!
//! All tweakable settings (scene layout, camera, display, keybindings) are
//! consolidated here. Options serialize to/from TOML for presets stored in
//! `assets/presets/`.

mod camera;
mod display;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PillarboxError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[scene]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Grid layout, pillar shape, and palette selection.
    pub scene: SceneOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Presentation settings.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PillarboxError> {
        let content =
            std::fs::read_to_string(path).map_err(PillarboxError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| PillarboxError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PillarboxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PillarboxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PillarboxError::Io)?;
        }
        std::fs::write(path, content).map_err(PillarboxError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteKey;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[scene]
palette = "pink"
grid_cells = 8
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.scene.palette, PaletteKey::Pink);
        assert_eq!(opts.scene.grid_cells, 8);
        // Everything else should be default
        assert_eq!(opts.scene.cell_size, 1.66);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.display.target_fps, 300);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(KeyAction::RecenterCamera)
        );
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::CyclePalette)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("display"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        // Scene should have exposed fields
        let scene = &props["scene"]["properties"];
        assert!(scene.get("palette").is_some());
        assert!(scene.get("grid_cells").is_some());

        // Camera clip planes are not UI-exposed
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
