use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    ///
    /// `perspective_rh` already uses the [0,1] depth range (wgpu/Vulkan
    /// convention).
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj =
            Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar);
        proj * view
    }
}

/// GPU uniform buffer holding the view-projection matrix and camera metadata.
///
/// Layout must match `CameraUniform` in `assets/shaders/pillar_field.wgsl`
/// (96 bytes: mat4 + two vec3/f32 pairs).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = (camera.target - camera.eye).normalize().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_the_wgsl_struct_size() {
        assert_eq!(size_of::<CameraUniform>(), 96);
    }

    #[test]
    fn forward_points_from_eye_to_target() {
        let camera = Camera {
            eye: Vec3::new(80.0, 0.0, 0.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 45.0,
            znear: 0.1,
            zfar: 500.0,
        };
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert!((Vec3::from(uniform.forward) - Vec3::NEG_X).length() < 1e-6);
        assert_eq!(uniform.position, [80.0, 0.0, 0.0]);
    }
}
