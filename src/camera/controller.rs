use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;

/// Starting orbit distance; the default grid box (extent ~33) fills the view
/// comfortably from here.
const DEFAULT_DISTANCE: f32 = 80.0;

/// Orbital camera: quaternion orientation around a focus point at a distance.
///
/// Owns the GPU uniform buffer and bind group consumed by the field shader.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// The camera state derived from orbit parameters.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 1 in the field shader).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the camera buffer.
    pub bind_group: wgpu::BindGroup,

    /// Whether the primary mouse button is held.
    pub mouse_pressed: bool,
    /// Whether shift is held (drag pans instead of rotating).
    pub shift_pressed: bool,
    /// Radians of rotation per pixel of drag.
    pub rotate_speed: f32,
    /// World units of pan per pixel of drag.
    pub pan_speed: f32,
    /// Fractional distance change per scroll step.
    pub zoom_speed: f32,
}

impl CameraController {
    /// Controller orbiting the origin from the +X axis, like the original
    /// viewpoint into the open face of the box.
    pub fn new(context: &RenderContext) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = DEFAULT_DISTANCE;
        let orientation = Self::initial_orientation();

        let camera = Camera {
            eye: focus_point + orientation * Vec3::Z * distance,
            target: focus_point,
            up: Vec3::Y,
            aspect: context.width() as f32 / context.height() as f32,
            fovy: 45.0,
            znear: 0.1,
            zfar: 500.0,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
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
                label: Some("Camera Bind Group"),
            });

        Self {
            orientation,
            distance,
            focus_point,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            mouse_pressed: false,
            shift_pressed: false,
            rotate_speed: 0.01,
            pan_speed: 0.1,
            zoom_speed: 0.05,
        }
    }

    // Maps local +Z onto +X, putting the eye on the positive X axis.
    fn initial_orientation() -> Quat {
        Quat::from_rotation_y(FRAC_PI_2)
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.focus_point + dir * self.distance;
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Recompute and upload the camera uniform.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Update the projection aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Orbit around the focus point by a screen-space drag delta.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around the camera's up vector.
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around the resulting right vector.
        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = vertical * self.orientation;

        self.update_camera_pos();
    }

    /// Translate the focus point in the view plane.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        self.focus_point += right * (-delta.x * self.pan_speed) + up * (delta.y * self.pan_speed);
        self.update_camera_pos();
    }

    /// Move toward or away from the focus point.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(1.0, 400.0);
        self.update_camera_pos();
    }

    /// Reset focus, orientation, and distance to the startup view.
    pub fn recenter(&mut self) {
        self.focus_point = Vec3::ZERO;
        self.distance = DEFAULT_DISTANCE;
        self.orientation = Self::initial_orientation();
        self.update_camera_pos();
    }

    /// Current orbit distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_orientation_looks_down_the_x_axis() {
        let dir = CameraController::initial_orientation() * Vec3::Z;
        assert!((dir - Vec3::X).length() < 1e-6);
        let up = CameraController::initial_orientation() * Vec3::Y;
        assert!((up - Vec3::Y).length() < 1e-6);
    }
}
