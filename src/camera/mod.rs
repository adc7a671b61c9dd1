//! Camera system for viewing the pillar box.
//!
//! An orbital controller (quaternion orientation around a focus point) and
//! the GPU uniform it feeds.

/// Orbital camera controller with rotation, panning, and zoom.
pub mod controller;
/// Camera math and the view-projection uniform.
pub mod core;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform};
