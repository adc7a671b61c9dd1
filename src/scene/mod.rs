//! Scene description: instance grid layout, wall placement, and the squish
//! wave that animates the field.
//!
//! Everything here is pure math over plain types. GPU upload lives in
//! `renderer`; this module is what the layout and shape tests exercise.

/// Centered square instance grid.
pub mod grid;
/// Placement of the five enclosing walls.
pub mod walls;
/// Squish wave math, mirrored by the vertex shader.
pub mod wave;

pub use grid::GridSpec;
pub use walls::{enclosing_walls, WallPlacement, WALL_COUNT};
