use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// cycle_palette = "Space"
/// toggle_pause = "KeyP"
/// ```
///
/// Digit keys 1–8 select palettes directly and are handled separately in
/// [`PillarRenderEngine::handle_key`](crate::PillarRenderEngine::handle_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Reset the orbit camera to the startup view.
    RecenterCamera,
    /// Advance to the next palette in cycling order.
    CyclePalette,
    /// Freeze or resume the animation clock.
    TogglePause,
}
