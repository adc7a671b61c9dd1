use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Presentation settings.
pub struct DisplayOptions {
    /// Frame rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 1000))]
    pub target_fps: u32,
    /// Start with the animation clock frozen.
    #[schemars(title = "Start Paused")]
    pub start_paused: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            target_fps: 300,
            start_paused: false,
        }
    }
}
