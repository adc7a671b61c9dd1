//! Instanced pillar field renderer.
//!
//! One vertex/index buffer (the shared cylinder), one storage buffer of grid
//! offsets, and one uniform array of five wall matrices back all five wall
//! draws. Each wall is a ranged instanced draw over the same buffers; the
//! vertex shader derives the wall index from the instance index, so uploading
//! new uniforms restyles every wall in the same submit.

use wgpu::util::DeviceExt;

use crate::error::PillarboxError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::typed_buffer::TypedBuffer;
use crate::renderer::pillar_mesh::PillarMesh;
use crate::scene::{GridSpec, WallPlacement, WALL_COUNT};

/// Per-instance grid offset in the local XZ plane.
///
/// Matches the `array<vec2<f32>>` storage buffer in the field shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceOffset {
    pub(crate) offset: [f32; 2],
}

/// The five wall model matrices, packed as one uniform array.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct WallTransforms {
    model: [[[f32; 4]; 4]; WALL_COUNT],
}

impl WallTransforms {
    fn new(walls: &[WallPlacement; WALL_COUNT]) -> Self {
        let mut model = [[[0.0; 4]; 4]; WALL_COUNT];
        for (slot, wall) in model.iter_mut().zip(walls) {
            *slot = wall.model_matrix().to_cols_array_2d();
        }
        Self { model }
    }
}

/// Renderer for the animated pillar box.
pub struct PillarFieldRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    // Exact-size buffer: the shader reads its length with arrayLength, so the
    // buffer is recreated (not grown) when the grid changes.
    instance_buffer: TypedBuffer<InstanceOffset>,
    wall_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    instances_per_wall: u32,
}

impl PillarFieldRenderer {
    /// Build the pipeline and upload mesh, offsets, and wall matrices.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Shader`] if the field shader fails to
    /// compose.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        field_layout: &wgpu::BindGroupLayout,
        mesh: &PillarMesh,
        grid: &GridSpec,
        walls: &[WallPlacement; WALL_COUNT],
        shader_composer: &mut ShaderComposer,
    ) -> Result<Self, PillarboxError> {
        let (vertex_buffer, index_buffer) = Self::create_mesh_buffers(&context.device, mesh);

        let instance_buffer = Self::create_instance_buffer(&context.device, grid);
        let wall_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Wall Transform Buffer"),
                contents: bytemuck::cast_slice(&[WallTransforms::new(walls)]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout = Self::create_bind_group_layout(&context.device);
        let bind_group = Self::create_bind_group(
            &context.device,
            &bind_group_layout,
            &instance_buffer,
            &wall_buffer,
        );
        let pipeline = Self::create_pipeline(
            context,
            &bind_group_layout,
            camera_layout,
            field_layout,
            shader_composer,
        )?;

        let instances_per_wall = instance_buffer.count() as u32;
        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            instance_buffer,
            wall_buffer,
            bind_group_layout,
            bind_group,
            instances_per_wall,
        })
    }

    fn create_mesh_buffers(
        device: &wgpu::Device,
        mesh: &PillarMesh,
    ) -> (wgpu::Buffer, wgpu::Buffer) {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Pillar Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Pillar Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        (vertex_buffer, index_buffer)
    }

    fn create_instance_buffer(
        device: &wgpu::Device,
        grid: &GridSpec,
    ) -> TypedBuffer<InstanceOffset> {
        let offsets: Vec<InstanceOffset> = grid
            .instance_offsets()
            .into_iter()
            .map(|o| InstanceOffset { offset: o.to_array() })
            .collect();
        TypedBuffer::new_with_data(
            device,
            "Pillar Instance Buffer",
            &offsets,
            wgpu::BufferUsages::STORAGE,
        )
    }

    fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Pillar Field Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        instance_buffer: &TypedBuffer<InstanceOffset>,
        wall_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: instance_buffer.buffer().as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wall_buffer.as_entire_binding(),
                },
            ],
            label: Some("Pillar Field Bind Group"),
        })
    }

    fn create_pipeline(
        context: &RenderContext,
        bind_group_layout: &wgpu::BindGroupLayout,
        camera_layout: &wgpu::BindGroupLayout,
        field_layout: &wgpu::BindGroupLayout,
        shader_composer: &mut ShaderComposer,
    ) -> Result<wgpu::RenderPipeline, PillarboxError> {
        let shader = shader_composer.compose(
            &context.device,
            "Pillar Field Shader",
            include_str!("../../assets/shaders/pillar_field.wgsl"),
            "pillar_field.wgsl",
        )?;

        let pipeline_layout =
            context
                .device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Pillar Field Pipeline Layout"),
                    bind_group_layouts: &[bind_group_layout, camera_layout, field_layout],
                    push_constant_ranges: &[],
                });

        Ok(context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Pillar Field Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[PillarMesh::vertex_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            }))
    }

    /// Replace the pillar mesh (radius or segment changes).
    pub fn set_mesh(&mut self, device: &wgpu::Device, mesh: &PillarMesh) {
        let (vertex_buffer, index_buffer) = Self::create_mesh_buffers(device, mesh);
        self.vertex_buffer = vertex_buffer;
        self.index_buffer = index_buffer;
        self.index_count = mesh.index_count();
    }

    /// Regenerate instance offsets and wall matrices for a new layout.
    ///
    /// The instance buffer is recreated at the exact new size (the shader
    /// derives the per-wall count from the buffer length), so the bind group
    /// is rebuilt as well.
    pub fn set_layout(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        grid: &GridSpec,
        walls: &[WallPlacement; WALL_COUNT],
    ) {
        self.instance_buffer = Self::create_instance_buffer(device, grid);
        self.bind_group = Self::create_bind_group(
            device,
            &self.bind_group_layout,
            &self.instance_buffer,
            &self.wall_buffer,
        );
        self.instances_per_wall = self.instance_buffer.count() as u32;
        queue.write_buffer(
            &self.wall_buffer,
            0,
            bytemuck::cast_slice(&[WallTransforms::new(walls)]),
        );
    }

    /// Total instances drawn per frame (all walls).
    pub fn instance_count(&self) -> u32 {
        self.instances_per_wall * WALL_COUNT as u32
    }

    /// Encode the five wall draws into the given pass.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
        field_bind_group: &'a wgpu::BindGroup,
    ) {
        if self.instances_per_wall == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_bind_group(1, camera_bind_group, &[]);
        render_pass.set_bind_group(2, field_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        // One ranged draw per wall; instance_index / per_wall selects the
        // wall matrix inside the shader.
        let n = self.instances_per_wall;
        for wall in 0..WALL_COUNT as u32 {
            render_pass.draw_indexed(0..self.index_count, 0, wall * n..(wall + 1) * n);
        }
    }
}
