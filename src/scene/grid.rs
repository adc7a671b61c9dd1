//! Centered square grid of per-instance offsets.

use glam::Vec2;

/// Immutable description of the square instance grid.
///
/// `cell_count` is the number of cells along one edge and `cell_size` the
/// world spacing between neighboring cell centers. The generated layout is
/// centered on the origin of the local XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    cell_count: u32,
    cell_size: f32,
}

impl GridSpec {
    /// New grid description.
    ///
    /// # Panics
    ///
    /// Panics if `cell_count` is zero or `cell_size` is not strictly
    /// positive. Callers on configuration paths clamp user values first.
    pub fn new(cell_count: u32, cell_size: f32) -> Self {
        assert!(cell_count > 0, "grid needs at least one cell per edge");
        assert!(cell_size > 0.0, "grid cell size must be positive");
        Self {
            cell_count,
            cell_size,
        }
    }

    /// Cells along one edge.
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// World spacing between neighboring cell centers.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of instances (`cell_count` squared).
    pub fn instance_count(&self) -> u32 {
        self.cell_count * self.cell_count
    }

    /// World extent of the grid along one edge (`cell_count * cell_size`).
    pub fn extent(&self) -> f32 {
        self.cell_count as f32 * self.cell_size
    }

    /// Per-instance offsets in the local XZ plane, row-major with the second
    /// axis outermost.
    ///
    /// Each offset is a cell center, so the set is symmetric about the
    /// origin for any cell count (odd counts place the middle cell exactly
    /// at zero).
    pub fn instance_offsets(&self) -> Vec<Vec2> {
        let count = self.cell_count as usize;
        let half = self.extent() / 2.0;
        let centering = self.cell_size / 2.0;
        let mut offsets = Vec::with_capacity(count * count);
        for y in 0..self.cell_count {
            for x in 0..self.cell_count {
                offsets.push(Vec2::new(
                    x as f32 * self.cell_size - half + centering,
                    y as f32 * self.cell_size - half + centering,
                ));
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_count_is_cell_count_squared() {
        for count in [1, 2, 3, 20] {
            let grid = GridSpec::new(count, 1.66);
            assert_eq!(grid.instance_offsets().len(), (count * count) as usize);
            assert_eq!(grid.instance_count(), count * count);
        }
    }

    #[test]
    fn layout_is_centered_on_the_origin() {
        let grid = GridSpec::new(20, 1.66);
        let offsets = grid.instance_offsets();
        let sum: Vec2 = offsets.iter().copied().sum();
        let mean = sum / offsets.len() as f32;
        assert!(mean.length() < 1e-4, "grid mean drifted to {mean:?}");
    }

    #[test]
    fn single_cell_sits_exactly_at_the_origin() {
        let grid = GridSpec::new(1, 2.5);
        assert_eq!(grid.instance_offsets(), vec![Vec2::ZERO]);
    }

    #[test]
    fn two_by_two_unit_spacing_yields_the_four_diagonal_cells() {
        let grid = GridSpec::new(2, 2.0);
        assert_eq!(
            grid.instance_offsets(),
            vec![
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn rows_scan_the_first_axis_before_the_second() {
        let grid = GridSpec::new(3, 1.0);
        let offsets = grid.instance_offsets();
        // First three entries share a y value and walk x upward.
        assert_eq!(offsets[0].y, offsets[1].y);
        assert_eq!(offsets[1].y, offsets[2].y);
        assert!(offsets[0].x < offsets[1].x && offsets[1].x < offsets[2].x);
        // Fourth entry starts the next row.
        assert!(offsets[3].y > offsets[0].y);
        assert_eq!(offsets[3].x, offsets[0].x);
    }

    #[test]
    fn extent_spans_the_whole_edge() {
        let grid = GridSpec::new(20, 1.66);
        assert!((grid.extent() - 33.2).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn zero_cell_count_is_rejected() {
        let _ = GridSpec::new(0, 1.0);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn non_positive_cell_size_is_rejected() {
        let _ = GridSpec::new(4, 0.0);
    }
}
