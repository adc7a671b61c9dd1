use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::palette::PaletteKey;
use crate::scene::GridSpec;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Grid layout, pillar shape, and palette selection.
pub struct SceneOptions {
    /// Active color palette.
    #[schemars(title = "Palette")]
    pub palette: PaletteKey,
    /// Cells per grid edge (each wall draws this many squared pillars).
    #[schemars(title = "Grid Cells", range(min = 1, max = 64))]
    pub grid_cells: u32,
    /// World spacing between neighboring pillars.
    #[schemars(title = "Cell Size", range(min = 0.1, max = 10.0), extend("step" = 0.01))]
    pub cell_size: f32,
    /// Pillar cylinder radius.
    #[schemars(title = "Pillar Radius", range(min = 0.05, max = 5.0), extend("step" = 0.01))]
    pub pillar_radius: f32,
    /// Faces around each pillar.
    #[schemars(title = "Radial Segments", range(min = 3, max = 32))]
    pub radial_segments: u32,
    /// Gap between the grid edge and each wall.
    #[schemars(title = "Wall Margin", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub wall_margin: f32,
    /// Stretch applied along each wall's pillar axis.
    #[schemars(title = "Wall Scale", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub wall_scale: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        // The original demo's numbers: 20x20 grid at 1.66 spacing, radius
        // 2/3 pillars, walls pushed out 5 units and stretched 10x.
        Self {
            palette: PaletteKey::Black,
            grid_cells: 20,
            cell_size: 1.66,
            pillar_radius: 2.0 / 3.0,
            radial_segments: 8,
            wall_margin: 5.0,
            wall_scale: 10.0,
        }
    }
}

impl SceneOptions {
    /// Grid description from the current values, clamped away from the
    /// degenerate settings `GridSpec` rejects.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.grid_cells.max(1), self.cell_size.max(0.01))
    }

    /// Pillar radius clamped to a drawable minimum.
    pub fn clamped_radius(&self) -> f32 {
        self.pillar_radius.max(0.01)
    }

    /// Radial segment count clamped to a closed shape.
    pub fn clamped_radial_segments(&self) -> u32 {
        self.radial_segments.max(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_layout() {
        let scene = SceneOptions::default();
        assert_eq!(scene.grid_cells, 20);
        assert!((scene.grid_spec().extent() - 33.2).abs() < 1e-4);
        assert_eq!(scene.palette, PaletteKey::Black);
    }

    #[test]
    fn degenerate_values_are_clamped_not_panicking() {
        let scene = SceneOptions {
            grid_cells: 0,
            cell_size: -1.0,
            pillar_radius: 0.0,
            radial_segments: 1,
            ..Default::default()
        };
        let grid = scene.grid_spec();
        assert_eq!(grid.cell_count(), 1);
        assert!(grid.cell_size() > 0.0);
        assert!(scene.clamped_radius() > 0.0);
        assert!(scene.clamped_radial_segments() >= 3);
    }
}
