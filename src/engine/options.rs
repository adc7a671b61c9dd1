//! Options management for [`PillarRenderEngine`]: applying settings at
//! runtime and loading/saving TOML presets.

use std::path::Path;

use super::{PillarRenderEngine, HEIGHT_SEGMENTS};
use crate::error::PillarboxError;
use crate::options::Options;
use crate::palette::{PaletteKey, PaletteParams};
use crate::renderer::PillarMesh;
use crate::scene::enclosing_walls;
use crate::util::FrameTiming;

/// Tuned so the default option values land on comfortable drag speeds.
const ROTATE_SPEED_SCALE: f32 = 0.02;
const PAN_SPEED_SCALE: f32 = 0.2;
const ZOOM_SPEED_SCALE: f32 = 0.5;

impl PillarRenderEngine {
    /// The engine's current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and apply every change to live GPU state.
    ///
    /// Mesh and layout buffers are only rebuilt for the fields that actually
    /// changed; a palette-only update touches nothing but the uniform.
    pub fn set_options(&mut self, mut options: Options) {
        options.keybindings.rebuild_reverse_map();
        let old = std::mem::replace(&mut self.options, options);
        let new = self.options.scene.clone();

        self.apply_camera_options();

        if old.display.target_fps != self.options.display.target_fps {
            self.frame_timing = FrameTiming::new(self.options.display.target_fps);
        }

        let mesh_changed = old.scene.pillar_radius != new.pillar_radius
            || old.scene.radial_segments != new.radial_segments;
        if mesh_changed {
            let mesh = PillarMesh::generate(
                new.clamped_radius(),
                new.clamped_radial_segments(),
                HEIGHT_SEGMENTS,
            );
            self.pillar_field.set_mesh(&self.context.device, &mesh);
        }

        let layout_changed = old.scene.grid_cells != new.grid_cells
            || old.scene.cell_size != new.cell_size
            || old.scene.wall_margin != new.wall_margin
            || old.scene.wall_scale != new.wall_scale;
        if layout_changed {
            let grid = new.grid_spec();
            let walls = enclosing_walls(grid.extent(), new.wall_margin, new.wall_scale);
            self.pillar_field.set_layout(
                &self.context.device,
                &self.context.queue,
                &grid,
                &walls,
            );
            log::debug!("layout rebuilt: {} pillars", self.pillar_field.instance_count());
        }

        if old.scene.palette != new.palette {
            let params = new.palette.params();
            self.field_uniforms.uniform.set_palette(&params);
            log::info!("palette switched to '{}'", new.palette);
        }
    }

    /// Push the camera option values into the controller and projection.
    pub(super) fn apply_camera_options(&mut self) {
        let opts = &self.options.camera;
        self.camera_controller.rotate_speed = opts.rotate_speed * ROTATE_SPEED_SCALE;
        self.camera_controller.pan_speed = opts.pan_speed * PAN_SPEED_SCALE;
        self.camera_controller.zoom_speed = opts.zoom_speed * ZOOM_SPEED_SCALE;
        self.camera_controller.camera.fovy = opts.fovy;
        self.camera_controller.camera.znear = opts.znear;
        self.camera_controller.camera.zfar = opts.zfar;
    }

    /// Switch to a built-in palette. Takes effect on the next frame; the
    /// uniform swap leaves every buffer and bind group in place.
    pub fn set_palette_key(&mut self, key: PaletteKey) {
        self.options.scene.palette = key;
        self.field_uniforms.uniform.set_palette(&key.params());
        log::info!("palette switched to '{key}'");
    }

    /// Apply custom palette parameters that do not correspond to a built-in
    /// key. The recorded key in the options is left untouched.
    pub fn set_palette(&mut self, params: &PaletteParams) {
        self.field_uniforms.uniform.set_palette(params);
    }

    /// Advance to the next palette in cycling order.
    pub fn cycle_palette(&mut self) {
        self.set_palette_key(self.options.scene.palette.next());
    }

    /// Load a TOML preset and apply it. Remembers the preset name.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Io`] if the file cannot be read or
    /// [`PillarboxError::OptionsParse`] if it is not a valid options file.
    pub fn load_preset(&mut self, path: &Path) -> Result<(), PillarboxError> {
        let options = Options::load(path)?;
        self.set_options(options);
        self.active_preset = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(ToOwned::to_owned);
        log::info!("loaded preset {}", path.display());
        Ok(())
    }

    /// Save the current options as a TOML preset.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Io`] if the file cannot be written.
    pub fn save_preset(&self, path: &Path) -> Result<(), PillarboxError> {
        self.options.save(path)
    }

    /// Name of the most recently loaded preset, if any.
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}
