//! Rigid placements that tile the instanced pillar field into a closed box.
//!
//! The same grid mesh is drawn five times: four side walls plus a floor. Each
//! placement is pure data; the renderer packs the model matrices into one
//! uniform array so all five draws share geometry and uniforms.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};

/// Number of wall placements enclosing the box.
pub const WALL_COUNT: usize = 5;

/// One rigid placement of the shared pillar field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPlacement {
    /// Orientation of the field's local up axis.
    pub rotation: Quat,
    /// World position of the field's grid center.
    pub translation: Vec3,
    /// Non-uniform scale; the local Y factor stretches the short pillars
    /// into wall-depth columns.
    pub scale: Vec3,
}

impl WallPlacement {
    /// Model matrix for this placement (`translation * rotation * scale`).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// The five placements enclosing a cuboid of side `extent`, with each wall
/// pushed `margin` world units past the half-extent and stretched `up_scale`
/// along its pillar axis.
///
/// Layout: walls at `±x` and `±z` face inward, the fifth placement is the
/// floor at `-y`. The ceiling stays open so an orbiting camera can look in.
pub fn enclosing_walls(extent: f32, margin: f32, up_scale: f32) -> [WallPlacement; WALL_COUNT] {
    let reach = extent / 2.0 + margin;
    let scale = Vec3::new(1.0, up_scale, 1.0);
    [
        WallPlacement {
            rotation: Quat::from_rotation_z(-FRAC_PI_2),
            translation: Vec3::new(-reach, 0.0, 0.0),
            scale,
        },
        WallPlacement {
            rotation: Quat::IDENTITY,
            translation: Vec3::new(0.0, -reach, 0.0),
            scale,
        },
        WallPlacement {
            rotation: Quat::from_rotation_z(PI),
            translation: Vec3::new(0.0, reach, 0.0),
            scale,
        },
        WallPlacement {
            rotation: Quat::from_rotation_x(FRAC_PI_2),
            translation: Vec3::new(0.0, 0.0, -reach),
            scale,
        },
        WallPlacement {
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
            translation: Vec3::new(0.0, 0.0, reach),
            scale,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: f32 = 33.2;
    const MARGIN: f32 = 5.0;
    const REACH: f32 = EXTENT / 2.0 + MARGIN;

    fn walls() -> [WallPlacement; WALL_COUNT] {
        enclosing_walls(EXTENT, MARGIN, 10.0)
    }

    #[test]
    fn translations_form_signed_pairs_on_each_axis() {
        let translations: Vec<Vec3> = walls().iter().map(|w| w.translation).collect();
        // One opposing pair on X, one on Y, one lone floor... the original
        // demo leaves +X open, so: X has one wall, Y and Z have pairs.
        let on_axis = |axis: usize, sign: f32| {
            translations
                .iter()
                .filter(|t| (t[axis] - sign * REACH).abs() < 1e-5)
                .count()
        };
        assert_eq!(on_axis(0, -1.0), 1);
        assert_eq!(on_axis(1, -1.0), 1);
        assert_eq!(on_axis(1, 1.0), 1);
        assert_eq!(on_axis(2, -1.0), 1);
        assert_eq!(on_axis(2, 1.0), 1);
    }

    #[test]
    fn no_two_placements_coincide() {
        let w = walls();
        for (i, a) in w.iter().enumerate() {
            for b in &w[i + 1..] {
                assert!(a.translation.distance(b.translation) > 1.0);
            }
        }
    }

    #[test]
    fn every_translation_sits_at_reach_distance() {
        for wall in walls() {
            assert!((wall.translation.length() - REACH).abs() < 1e-4);
        }
    }

    #[test]
    fn pillars_point_into_the_enclosed_volume() {
        // A pillar tip at local +Y must end up closer to the origin than its
        // base once the wall transform is applied.
        for wall in walls() {
            let matrix = wall.model_matrix();
            let base = matrix.transform_point3(Vec3::ZERO);
            let tip = matrix.transform_point3(Vec3::new(0.0, 0.5, 0.0));
            assert!(
                tip.length() < base.length() + 1e-4,
                "pillar at {:?} points outward",
                wall.translation
            );
        }
    }

    #[test]
    fn up_scale_stretches_only_the_local_vertical_axis() {
        let wall = enclosing_walls(10.0, 5.0, 10.0)[1];
        let matrix = wall.model_matrix();
        let unit_up = matrix.transform_vector3(Vec3::Y);
        let unit_right = matrix.transform_vector3(Vec3::X);
        assert!((unit_up.length() - 10.0).abs() < 1e-4);
        assert!((unit_right.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn reach_scales_with_extent_and_margin() {
        let near = enclosing_walls(2.0, 1.0, 10.0);
        for wall in near {
            assert!((wall.translation.length() - 2.0).abs() < 1e-5);
        }
    }
}
