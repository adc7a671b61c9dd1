//! The render engine: owns the GPU context, scene resources, and the frame
//! loop.
//!
//! [`PillarRenderEngine`] ties together the camera, the field uniforms, and
//! the instanced pillar renderer. The viewer (or an embedding host) drives it
//! with [`update`](PillarRenderEngine::update) /
//! [`render`](PillarRenderEngine::render) each frame and forwards input
//! through [`handle_input`](PillarRenderEngine::handle_input).

mod input;
mod options;

use crate::camera::CameraController;
use crate::error::PillarboxError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::options::Options;
use crate::palette::PaletteKey;
use crate::renderer::{FieldUniforms, PillarFieldRenderer, PillarMesh};
use crate::scene::enclosing_walls;
use crate::util::FrameTiming;

/// Vertical subdivisions of the pillar cylinder. The squish scales Y
/// linearly, so a coarse mesh deforms identically to a fine one.
const HEIGHT_SEGMENTS: u32 = 2;

/// Top-level engine driving the animated pillar field.
pub struct PillarRenderEngine {
    /// GPU device, queue, and surface.
    pub context: RenderContext,
    /// Orbital camera and its GPU uniform.
    pub camera_controller: CameraController,
    field_uniforms: FieldUniforms,
    pillar_field: PillarFieldRenderer,
    depth_view: wgpu::TextureView,
    /// Frame pacing and smoothed FPS.
    pub frame_timing: FrameTiming,
    options: Options,
    active_preset: Option<String>,
    /// Animation clock in seconds; frozen while paused.
    time: f32,
    paused: bool,
    last_cursor_pos: Option<(f32, f32)>,
}

impl PillarRenderEngine {
    /// Create an engine rendering to the given window with default options.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Gpu`] if GPU initialization fails, or
    /// [`PillarboxError::Shader`] if the field shader fails to compose.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, PillarboxError> {
        Self::new_with_options(window, size, Options::default()).await
    }

    /// Create an engine rendering to the given window with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Gpu`] if GPU initialization fails, or
    /// [`PillarboxError::Shader`] if the field shader fails to compose.
    pub async fn new_with_options(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, PillarboxError> {
        let context = RenderContext::new(window, size).await?;
        Self::init_with_context(context, options)
    }

    /// Create an engine from an externally-owned device and queue, rendering
    /// to offscreen textures instead of a window surface.
    ///
    /// # Errors
    ///
    /// Returns [`PillarboxError::Shader`] if the field shader fails to
    /// compose.
    pub fn new_from_context(
        device: wgpu::Device,
        queue: wgpu::Queue,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        options: Options,
    ) -> Result<Self, PillarboxError> {
        let context = RenderContext::from_device(device, queue, format, width, height);
        Self::init_with_context(context, options)
    }

    fn init_with_context(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, PillarboxError> {
        let mut shader_composer = ShaderComposer::new()?;
        let camera_controller = CameraController::new(&context);
        let field_uniforms = FieldUniforms::new(&context, &options.scene.palette.params());

        let mesh = PillarMesh::generate(
            options.scene.clamped_radius(),
            options.scene.clamped_radial_segments(),
            HEIGHT_SEGMENTS,
        );
        let grid = options.scene.grid_spec();
        let walls = enclosing_walls(
            grid.extent(),
            options.scene.wall_margin,
            options.scene.wall_scale,
        );

        let pillar_field = PillarFieldRenderer::new(
            &context,
            &camera_controller.layout,
            &field_uniforms.layout,
            &mesh,
            &grid,
            &walls,
            &mut shader_composer,
        )?;

        let depth_view =
            create_depth_view(&context.device, context.width(), context.height());
        let frame_timing = FrameTiming::new(options.display.target_fps);
        let paused = options.display.start_paused;

        log::info!(
            "engine up: {} pillars across {} walls, palette '{}'",
            pillar_field.instance_count(),
            crate::scene::WALL_COUNT,
            options.scene.palette,
        );

        let mut engine = Self {
            context,
            camera_controller,
            field_uniforms,
            pillar_field,
            depth_view,
            frame_timing,
            options,
            active_preset: None,
            time: 0.0,
            paused,
            last_cursor_pos: None,
        };
        engine.apply_camera_options();
        engine.camera_controller.update_gpu(&engine.context.queue);
        Ok(engine)
    }

    /// Advance the animation clock. No-op while paused.
    pub fn update(&mut self, dt: f32) {
        if !self.paused {
            self.time += dt;
        }
        self.field_uniforms.uniform.time = self.time;
    }

    /// Render one frame to the window surface.
    ///
    /// Skips the frame entirely when the FPS cap says it is too early.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture could not be
    /// acquired; the caller should resize on `Outdated` / `Lost`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        self.upload_frame_uniforms();

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.encode_field_pass(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }

    /// Render one frame into an arbitrary color attachment (offscreen mode).
    ///
    /// The attachment must match the context's configured format and size.
    pub fn render_to_texture(&mut self, view: &wgpu::TextureView) {
        self.upload_frame_uniforms();
        let mut encoder = self.context.create_encoder();
        self.encode_field_pass(&mut encoder, view);
        self.context.submit(encoder);
        self.frame_timing.end_frame();
    }

    fn upload_frame_uniforms(&mut self) {
        self.camera_controller.update_gpu(&self.context.queue);
        self.field_uniforms.update_gpu(&self.context.queue);
    }

    fn encode_field_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
    ) {
        let bg = self.field_uniforms.uniform.background;
        let clear = wgpu::Color {
            r: f64::from(bg[0]),
            g: f64::from(bg[1]),
            b: f64::from(bg[2]),
            a: 1.0,
        };

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Pillar Field Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.pillar_field.draw(
            &mut pass,
            &self.camera_controller.bind_group,
            &self.field_uniforms.bind_group,
        );
    }

    /// Resize the surface, projection, and depth attachment.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera_controller
            .resize(self.context.width(), self.context.height());
        self.depth_view = create_depth_view(
            &self.context.device,
            self.context.width(),
            self.context.height(),
        );
    }

    /// Freeze or resume the animation clock.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("animation {}", if self.paused { "paused" } else { "resumed" });
    }

    /// Whether the animation clock is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current animation time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// The palette currently driving the field colors.
    pub fn palette_key(&self) -> PaletteKey {
        self.options.scene.palette
    }

    /// Total pillars drawn per frame.
    pub fn instance_count(&self) -> u32 {
        self.pillar_field.instance_count()
    }
}

/// Depth attachment matching the surface size, recreated on every resize.
fn create_depth_view(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
