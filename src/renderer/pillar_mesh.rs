//! Shared pillar geometry: a short capped cylinder, height 1, two height
//! segments so the middle seam exists for the squish deformation to bend.
//!
//! One mesh is generated on the CPU and uploaded once; every instance on
//! every wall reuses it with a per-instance offset applied in the shader.

use std::f32::consts::TAU;

/// One pillar vertex as uploaded to the GPU.
///
/// Layout must match `VertexInput` in `assets/shaders/pillar_field.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PillarVertex {
    /// Local position; y spans [-0.5, 0.5].
    pub position: [f32; 3],
    /// Texture coordinate; v runs 0 at the base to 1 at the top.
    pub uv: [f32; 2],
}

/// CPU-side pillar mesh, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarMesh {
    /// Vertex data (side rings plus both cap fans).
    pub vertices: Vec<PillarVertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

/// Half the pillar height; caps sit at `y = ±CAP_Y`.
pub const CAP_Y: f32 = 0.5;

impl PillarMesh {
    /// Vertex buffer layout for [`PillarVertex`].
    pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
        wgpu::VertexBufferLayout {
            array_stride: size_of::<PillarVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }

    /// Generate a capped cylinder of the given radius.
    ///
    /// `radial_segments` faces around the axis, `height_segments` bands along
    /// it. The seam column is duplicated so texture coordinates wrap cleanly.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not strictly positive or either segment count is
    /// below the minimum closed shape (3 radial, 1 height).
    pub fn generate(radius: f32, radial_segments: u32, height_segments: u32) -> Self {
        assert!(radius > 0.0, "pillar radius must be positive");
        assert!(radial_segments >= 3, "need at least 3 radial segments");
        assert!(height_segments >= 1, "need at least 1 height segment");

        let ring_len = radial_segments + 1;
        let side_vertices = ring_len * (height_segments + 1);
        let cap_vertices = 2 * (ring_len + 1);
        let mut vertices = Vec::with_capacity((side_vertices + cap_vertices) as usize);
        let mut indices =
            Vec::with_capacity((height_segments * radial_segments * 6 + radial_segments * 6) as usize);

        // Side rings, bottom to top.
        for ring in 0..=height_segments {
            let t = ring as f32 / height_segments as f32;
            let y = t - CAP_Y;
            for seg in 0..ring_len {
                let theta = seg as f32 / radial_segments as f32 * TAU;
                vertices.push(PillarVertex {
                    position: [radius * theta.cos(), y, radius * theta.sin()],
                    uv: [seg as f32 / radial_segments as f32, t],
                });
            }
        }
        for ring in 0..height_segments {
            let below = ring * ring_len;
            let above = below + ring_len;
            for seg in 0..radial_segments {
                let (a, b) = (below + seg, below + seg + 1);
                let (c, d) = (above + seg, above + seg + 1);
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        // Caps: a center vertex plus its own ring, fanned into triangles. The
        // shader snaps uv.y on these via the cap threshold, so the values
        // here only seed the interpolation.
        for (y, flip) in [(CAP_Y, false), (-CAP_Y, true)] {
            let v = if flip { 0.0 } else { 1.0 };
            let center = vertices.len() as u32;
            vertices.push(PillarVertex {
                position: [0.0, y, 0.0],
                uv: [0.5, v],
            });
            for seg in 0..ring_len {
                let theta = seg as f32 / radial_segments as f32 * TAU;
                vertices.push(PillarVertex {
                    position: [radius * theta.cos(), y, radius * theta.sin()],
                    uv: [seg as f32 / radial_segments as f32, v],
                });
            }
            for seg in 0..radial_segments {
                let a = center + 1 + seg;
                let b = center + 2 + seg;
                if flip {
                    indices.extend_from_slice(&[center, a, b]);
                } else {
                    indices.extend_from_slice(&[center, b, a]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Number of triangle-list indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 2.0 / 3.0;

    fn mesh() -> PillarMesh {
        PillarMesh::generate(RADIUS, 8, 2)
    }

    #[test]
    fn default_shape_has_expected_counts() {
        let m = mesh();
        // 3 side rings of 9 + two caps of 10.
        assert_eq!(m.vertices.len(), 27 + 20);
        // 2 bands * 8 quads * 6 + 2 caps * 8 triangles * 3.
        assert_eq!(m.indices.len(), 96 + 48);
        assert_eq!(m.index_count(), 144);
    }

    #[test]
    fn all_indices_are_in_bounds() {
        let m = mesh();
        let max = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn side_vertices_sit_on_the_cylinder_surface() {
        let m = mesh();
        for v in &m.vertices[..27] {
            let r = (v.position[0] * v.position[0] + v.position[2] * v.position[2]).sqrt();
            assert!((r - RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn height_spans_one_unit_with_a_middle_seam() {
        let m = mesh();
        let ys: Vec<f32> = m.vertices[..27].iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().any(|&y| (y + CAP_Y).abs() < 1e-6));
        assert!(ys.iter().any(|&y| y.abs() < 1e-6));
        assert!(ys.iter().any(|&y| (y - CAP_Y).abs() < 1e-6));
    }

    #[test]
    fn uv_v_runs_base_to_top() {
        let m = mesh();
        for v in &m.vertices[..27] {
            let expected = v.position[1] + CAP_Y;
            assert!((v.uv[1] - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn cap_vertices_sit_past_the_shader_threshold() {
        let m = mesh();
        for v in &m.vertices[27..] {
            assert!(v.position[1].abs() > 0.49999);
        }
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn zero_radius_is_rejected() {
        let _ = PillarMesh::generate(0.0, 8, 2);
    }
}
