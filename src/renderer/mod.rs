//! GPU rendering of the pillar field.
//!
//! `pillar_mesh` generates the shared cylinder on the CPU, `field_uniforms`
//! owns the time + palette uniform state, and `pillar_field` ties both to the
//! instanced five-wall draw.

pub mod field_uniforms;
pub mod pillar_field;
pub mod pillar_mesh;

pub use field_uniforms::{FieldUniform, FieldUniforms};
pub use pillar_field::PillarFieldRenderer;
pub use pillar_mesh::{PillarMesh, PillarVertex};
