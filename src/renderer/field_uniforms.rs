//! Shared time + palette uniform state for the pillar field.
//!
//! One buffer feeds every wall draw. Both writers — the frame clock for
//! `time`, the palette switch for the color terms — mutate the CPU copy and
//! the whole struct is uploaded in a single `write_buffer` before the pass
//! is encoded, so a palette swap can never show half-old, half-new values
//! within one frame.

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::palette::PaletteParams;

/// GPU uniform mirroring `FieldUniform` in `assets/shaders/pillar_field.wgsl`.
///
/// WGSL layout (vec3 fields are 16-aligned, scalars fill the tail slots):
///   background: vec3<f32>      (offset 0)
///   time: f32                  (offset 12)
///   c0: vec3<f32>              (offset 16)
///   palette_offset: f32        (offset 28)
///   c1: vec3<f32>              (offset 32)
///   _pad0: f32                 (offset 44)
///   c2: vec3<f32>              (offset 48)
///   _pad1: f32                 (offset 60)
///   c3: vec3<f32>              (offset 64)
///   _pad2: f32                 (offset 76)
///   Total: 80 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniform {
    /// Background color the fragment stage blends toward.
    pub background: [f32; 3],
    /// Animation clock in seconds.
    pub time: f32,
    /// Cosine gradient bias term.
    pub c0: [f32; 3],
    /// Phase offset added to the gradient sample position.
    pub palette_offset: f32,
    /// Cosine gradient amplitude term.
    pub c1: [f32; 3],
    _pad0: f32,
    /// Cosine gradient frequency term.
    pub c2: [f32; 3],
    _pad1: f32,
    /// Cosine gradient phase term.
    pub c3: [f32; 3],
    _pad2: f32,
}

impl FieldUniform {
    /// Uniform at time zero with the given palette applied.
    pub fn new(params: &PaletteParams) -> Self {
        let mut uniform = Self::zeroed();
        uniform.set_palette(params);
        uniform
    }

    /// Overwrite every palette-derived field in place. The buffer binding is
    /// untouched; only values change.
    pub fn set_palette(&mut self, params: &PaletteParams) {
        self.background = params.background;
        self.c0 = params.c0;
        self.c1 = params.c1;
        self.c2 = params.c2;
        self.c3 = params.c3;
        self.palette_offset = params.offset;
    }

    /// The palette currently held by this uniform.
    pub fn palette(&self) -> PaletteParams {
        PaletteParams {
            background: self.background,
            c0: self.c0,
            c1: self.c1,
            c2: self.c2,
            c3: self.c3,
            offset: self.palette_offset,
        }
    }
}

/// Owner of the field uniform buffer and its bind group.
pub struct FieldUniforms {
    /// CPU copy, uploaded wholesale each frame.
    pub uniform: FieldUniform,
    buffer: wgpu::Buffer,
    /// Bind group layout (group 2 in the field shader).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the uniform buffer.
    pub bind_group: wgpu::BindGroup,
}

impl FieldUniforms {
    /// Create the buffer, layout, and bind group with an initial palette.
    pub fn new(context: &RenderContext, params: &PaletteParams) -> Self {
        let uniform = FieldUniform::new(params);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Field Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Field Uniform Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Field Uniform Bind Group"),
            });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload the CPU copy. Call once per frame, after all writers ran.
    pub fn update_gpu(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteKey;

    #[test]
    fn layout_matches_the_wgsl_struct_size() {
        assert_eq!(size_of::<FieldUniform>(), 80);
    }

    #[test]
    fn set_palette_replaces_every_color_field() {
        let mut uniform = FieldUniform::new(&PaletteKey::Black.params());
        uniform.time = 3.5;
        let pink = PaletteKey::Pink.params();
        uniform.set_palette(&pink);
        assert_eq!(uniform.palette(), pink);
        // The clock belongs to the other writer and must survive a swap.
        assert_eq!(uniform.time, 3.5);
    }

    #[test]
    fn palette_round_trip_is_lossless() {
        let a = PaletteKey::Aquamarine.params();
        let b = PaletteKey::Orange.params();
        let mut uniform = FieldUniform::new(&a);
        uniform.set_palette(&b);
        uniform.set_palette(&a);
        assert_eq!(uniform.palette(), a);
    }
}
