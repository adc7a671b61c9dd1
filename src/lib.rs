//! GPU-accelerated animated pillar field built on wgpu.
//!
//! Pillarbox renders a grid of instanced cylinders tiled across the five
//! inner faces of a box. A traveling wave squishes each pillar based on its
//! distance from the grid center, and a cosine-gradient palette maps the
//! squish value to color. Palettes hot-swap via a single uniform upload.
//!
//! # Key entry points
//!
//! - [`PillarRenderEngine`] - the rendering engine
//! - [`Viewer`] - a standalone winit window driving the engine
//! - [`Options`] - runtime configuration (scene, camera, display,
//!   keybindings) with TOML preset support
//! - [`PaletteKey`] - the built-in cosine palettes
//!
//! # Architecture
//!
//! All per-frame animation runs on the GPU: the vertex shader reads a time
//! uniform plus a storage buffer of grid offsets and derives each pillar's
//! wall, position, and squish from its instance index. The CPU only advances
//! the clock and uploads two small uniforms per frame.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod palette;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::PillarRenderEngine;
pub use error::PillarboxError;
pub use input::{InputEvent, KeyAction, MouseButton};
pub use options::Options;
pub use palette::{PaletteKey, PaletteParams};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
