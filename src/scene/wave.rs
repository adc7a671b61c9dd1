//! CPU reference of the squish wave evaluated per vertex on the GPU.
//!
//! The vertex shader in `assets/shaders/pillar_field.wgsl` is the hot path;
//! these functions exist so the wave shape can be tested and benchmarked
//! without a device. Constants here and in the shader must stay in sync.

/// Radians of wave phase per world unit of distance from the grid center.
pub const WAVE_FREQUENCY: f32 = 0.3;
/// Radians of wave phase per second.
pub const WAVE_SPEED: f32 = 2.0;
/// Fully squished pillars keep this fraction of their height.
pub const MIN_HEIGHT: f32 = 0.2;

/// Raw wave value in [-1, 1] for an instance at distance `len` from the grid
/// center at time `time` (seconds). Phase decreases with time, so crests
/// travel outward.
#[inline]
pub fn activation(len: f32, time: f32) -> f32 {
    (len * WAVE_FREQUENCY - time * WAVE_SPEED).sin()
}

/// Remap an activation in [-1, 1] to a squish factor in [0, 1].
///
/// Uses the smoothstep polynomial, so the mapping is monotonic and has zero
/// slope at both ends — pillars ease into their extremes instead of popping.
#[inline]
pub fn squish(activation: f32) -> f32 {
    let t = ((activation + 1.0) / 2.0).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Vertical scale applied to a pillar for a given squish factor. Never drops
/// below [`MIN_HEIGHT`].
#[inline]
pub fn height_scale(squish: f32) -> f32 {
    MIN_HEIGHT + (1.0 - MIN_HEIGHT) * squish
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squish_endpoints_are_exact() {
        assert_eq!(squish(-1.0), 0.0);
        assert_eq!(squish(1.0), 1.0);
        assert_eq!(squish(0.0), 0.5);
    }

    #[test]
    fn squish_is_monotonic_over_the_activation_range() {
        let mut prev = squish(-1.0);
        for step in 1..=200 {
            let a = -1.0 + step as f32 / 100.0;
            let next = squish(a);
            assert!(next >= prev, "squish decreased at activation {a}");
            prev = next;
        }
    }

    #[test]
    fn squish_has_zero_slope_at_both_ends() {
        let eps = 1e-3;
        let slope_low = (squish(-1.0 + eps) - squish(-1.0)) / eps;
        let slope_high = (squish(1.0) - squish(1.0 - eps)) / eps;
        assert!(slope_low.abs() < 5e-3, "slope at -1 was {slope_low}");
        assert!(slope_high.abs() < 5e-3, "slope at +1 was {slope_high}");
    }

    #[test]
    fn squish_clamps_out_of_range_activation() {
        assert_eq!(squish(-2.0), 0.0);
        assert_eq!(squish(2.0), 1.0);
    }

    #[test]
    fn activation_stays_in_unit_range() {
        for i in 0..100 {
            let len = i as f32 * 0.47;
            let t = i as f32 * 0.31;
            let a = activation(len, t);
            assert!((-1.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn wave_phase_depends_on_distance_from_center() {
        // Two instances at different radii are at different phases, which is
        // what makes the wave ripple outward rather than pulse uniformly.
        let t = 1.0;
        assert_ne!(activation(0.0, t), activation(10.0, t));
    }

    #[test]
    fn height_never_drops_below_the_floor() {
        for step in 0..=100 {
            let s = step as f32 / 100.0;
            let h = height_scale(s);
            assert!((MIN_HEIGHT..=1.0).contains(&h));
        }
        assert_eq!(height_scale(0.0), MIN_HEIGHT);
        assert_eq!(height_scale(1.0), 1.0);
    }
}
