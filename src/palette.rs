//! Built-in cosine palettes and the keys that name them.
//!
//! Each palette is a background color plus the four coefficient vectors of a
//! cosine gradient (`a + b * cos(TAU * (c * t + d))`). The fragment shader
//! samples the gradient at the per-instance squish value, so swapping the
//! coefficients restyles the whole field without touching any geometry.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PillarboxError;

/// Name of one of the built-in palettes.
///
/// Serializes as the lowercase key used in presets and on the command line
/// (`"darkblue"`, not `"dark_blue"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKey {
    /// Near-black background with a full rainbow ramp.
    #[default]
    Black,
    /// Warm pink background, magenta-leaning ramp.
    Pink,
    /// Sea-green background, teal ramp.
    Aquamarine,
    /// Saturated blue background, cool ramp.
    Blue,
    /// Deep night-blue background, muted ramp.
    DarkBlue,
    /// Neutral grey background, monochrome ramp.
    Grey,
    /// Near-white background, pastel ramp.
    White,
    /// Vivid orange background, ember ramp.
    Orange,
}

impl PaletteKey {
    /// All palette keys, in cycling order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Pink,
        Self::Aquamarine,
        Self::Blue,
        Self::DarkBlue,
        Self::Grey,
        Self::White,
        Self::Orange,
    ];

    /// The lowercase string form used in presets and CLI arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Pink => "pink",
            Self::Aquamarine => "aquamarine",
            Self::Blue => "blue",
            Self::DarkBlue => "darkblue",
            Self::Grey => "grey",
            Self::White => "white",
            Self::Orange => "orange",
        }
    }

    /// The key after this one in [`Self::ALL`], wrapping at the end.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The palette parameters this key names.
    pub fn params(self) -> PaletteParams {
        match self {
            Self::Black => PaletteParams {
                background: [0.02, 0.02, 0.02],
                c0: [0.5, 0.5, 0.5],
                c1: [0.5, 0.5, 0.5],
                c2: [1.0, 1.0, 1.0],
                c3: [0.0, 0.33, 0.67],
                offset: 0.0,
            },
            Self::Pink => PaletteParams {
                background: [0.93, 0.56, 0.77],
                c0: [0.72, 0.42, 0.56],
                c1: [0.26, 0.22, 0.28],
                c2: [1.0, 1.0, 1.0],
                c3: [0.92, 0.22, 0.45],
                offset: 0.0,
            },
            Self::Aquamarine => PaletteParams {
                background: [0.30, 0.89, 0.71],
                c0: [0.30, 0.64, 0.54],
                c1: [0.24, 0.30, 0.26],
                c2: [1.0, 0.8, 1.0],
                c3: [0.35, 0.60, 0.50],
                offset: 0.5,
            },
            Self::Blue => PaletteParams {
                background: [0.10, 0.22, 0.66],
                c0: [0.32, 0.40, 0.74],
                c1: [0.30, 0.30, 0.26],
                c2: [1.0, 1.0, 1.0],
                c3: [0.60, 0.55, 0.50],
                offset: 0.0,
            },
            Self::DarkBlue => PaletteParams {
                background: [0.02, 0.04, 0.15],
                c0: [0.20, 0.25, 0.45],
                c1: [0.25, 0.25, 0.35],
                c2: [1.0, 1.0, 0.8],
                c3: [0.55, 0.50, 0.45],
                offset: 0.25,
            },
            Self::Grey => PaletteParams {
                background: [0.55, 0.55, 0.57],
                c0: [0.45, 0.45, 0.45],
                c1: [0.35, 0.35, 0.35],
                c2: [1.0, 1.0, 1.0],
                c3: [0.0, 0.0, 0.0],
                offset: 0.0,
            },
            Self::White => PaletteParams {
                background: [0.96, 0.96, 0.97],
                c0: [0.70, 0.70, 0.72],
                c1: [0.30, 0.28, 0.28],
                c2: [1.0, 1.0, 1.0],
                c3: [0.0, 0.10, 0.20],
                offset: 0.5,
            },
            Self::Orange => PaletteParams {
                background: [0.95, 0.45, 0.08],
                c0: [0.65, 0.40, 0.20],
                c1: [0.35, 0.30, 0.20],
                c2: [1.0, 1.0, 1.0],
                c3: [0.0, 0.15, 0.25],
                offset: 0.0,
            },
        }
    }
}

impl fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKey {
    type Err = PillarboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|key| key.as_str()).collect();
                PillarboxError::Configuration(format!(
                    "unknown palette key '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Full parameter set of one palette: background plus cosine coefficients.
///
/// Pure data. GPU upload happens in `renderer::field_uniforms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteParams {
    /// Scene background color, linear RGB.
    pub background: [f32; 3],
    /// Cosine bias term `a`.
    pub c0: [f32; 3],
    /// Cosine amplitude term `b`.
    pub c1: [f32; 3],
    /// Cosine frequency term `c`.
    pub c2: [f32; 3],
    /// Cosine phase term `d`.
    pub c3: [f32; 3],
    /// Phase offset added to the sample position.
    pub offset: f32,
}

impl PaletteParams {
    /// CPU mirror of `cosine_palette` in `assets/shaders/modules/palette.wgsl`,
    /// including the palette's own phase offset.
    pub fn sample(&self, t: f32) -> [f32; 3] {
        let t = t + self.offset;
        let mut color = [0.0_f32; 3];
        for (i, channel) in color.iter_mut().enumerate() {
            *channel = self.c0[i]
                + self.c1[i] * (std::f32::consts::TAU * (self.c2[i] * t + self.c3[i])).cos();
        }
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_from_its_string_form() {
        for key in PaletteKey::ALL {
            let parsed: PaletteKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn unknown_key_is_a_configuration_error() {
        let err = "magenta".parse::<PaletteKey>().unwrap_err();
        assert!(matches!(err, PillarboxError::Configuration(_)));
        assert!(err.to_string().contains("magenta"));
    }

    #[test]
    fn darkblue_has_no_separator_in_serialized_form() {
        let json = serde_json::to_string(&PaletteKey::DarkBlue).unwrap();
        assert_eq!(json, "\"darkblue\"");
        let round: PaletteKey = serde_json::from_str("\"darkblue\"").unwrap();
        assert_eq!(round, PaletteKey::DarkBlue);
    }

    #[test]
    fn cycling_visits_every_key_once_before_wrapping() {
        let mut seen = vec![PaletteKey::default()];
        let mut key = PaletteKey::default();
        for _ in 1..PaletteKey::ALL.len() {
            key = key.next();
            assert!(!seen.contains(&key));
            seen.push(key);
        }
        assert_eq!(key.next(), PaletteKey::default());
    }

    #[test]
    fn palettes_are_pairwise_distinct() {
        for (i, a) in PaletteKey::ALL.iter().enumerate() {
            for b in &PaletteKey::ALL[i + 1..] {
                assert_ne!(a.params(), b.params(), "{a} and {b} share parameters");
            }
        }
    }

    #[test]
    fn sample_honors_the_bias_and_amplitude_bounds() {
        for key in PaletteKey::ALL {
            let params = key.params();
            for step in 0..=20 {
                let t = step as f32 / 20.0;
                let color = params.sample(t);
                for i in 0..3 {
                    assert!(color[i] >= params.c0[i] - params.c1[i] - 1e-5);
                    assert!(color[i] <= params.c0[i] + params.c1[i] + 1e-5);
                }
            }
        }
    }
}
