//! Input handling for [`PillarRenderEngine`].

use glam::Vec2;

use super::PillarRenderEngine;
use crate::input::{InputEvent, KeyAction, MouseButton};
use crate::palette::PaletteKey;

impl PillarRenderEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the engine dispatches to camera
    /// rotation, pan, and zoom.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.dispatch_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.camera_controller.mouse_pressed = pressed;
                }
            }
            InputEvent::Scroll { delta } => self.camera_controller.zoom(delta),
            InputEvent::ModifiersChanged { shift } => {
                self.camera_controller.shift_pressed = shift;
            }
        }
    }

    /// Cursor moved — compute delta, forward to the camera while dragging.
    fn dispatch_cursor_moved(&mut self, x: f32, y: f32) {
        let (delta_x, delta_y) = if let Some((lx, ly)) = self.last_cursor_pos {
            (x - lx, y - ly)
        } else {
            (0.0, 0.0)
        };
        self.last_cursor_pos = Some((x, y));

        if self.camera_controller.mouse_pressed {
            let delta = Vec2::new(delta_x, delta_y);
            if self.camera_controller.shift_pressed {
                self.camera_controller.pan(delta);
            } else {
                self.camera_controller.rotate(delta);
            }
        }
    }

    /// Process a key press given as a winit `KeyCode` debug string (e.g.
    /// `"Space"`, `"Digit3"`).
    ///
    /// Bound actions take precedence; the digit row 1–8 then selects a
    /// palette directly. Returns `true` if the key did something.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if let Some(action) = self.options().keybindings.lookup(key) {
            action.execute(self);
            return true;
        }

        if let Some(digit) = key.strip_prefix("Digit") {
            if let Ok(index) = digit.parse::<usize>() {
                if (1..=PaletteKey::ALL.len()).contains(&index) {
                    self.set_palette_key(PaletteKey::ALL[index - 1]);
                    return true;
                }
            }
        }

        false
    }
}

// ── KeyAction execution ──

impl KeyAction {
    /// Execute this action on the given engine.
    pub fn execute(self, engine: &mut PillarRenderEngine) {
        match self {
            Self::RecenterCamera => engine.camera_controller.recenter(),
            Self::CyclePalette => engine.cycle_palette(),
            Self::TogglePause => engine.toggle_pause(),
        }
    }
}
