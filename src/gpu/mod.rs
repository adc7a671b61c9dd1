//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, typed buffer construction,
//! and shader composition.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Fixed-size typed GPU buffers.
pub mod typed_buffer;
