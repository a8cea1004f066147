//! GPU uniform block derived from the camera rig.

use glam::Mat4;

use super::rig::CameraRig;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame camera data handed to the shading stage.
///
/// NOTE: Must match the WGSL struct layout exactly (96 bytes).
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera forward direction, for view-dependent shading.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Rebuild every field from the rig's current state.
    ///
    /// Called once per frame after input has been applied; the basis a
    /// rig reports is always the post-update one, so nothing here can go
    /// stale.
    pub fn update(
        &mut self,
        rig: &CameraRig,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        let view = rig.view_matrix();
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            rig.fov_deg().to_radians(),
            aspect,
            znear,
            zfar,
        );
        self.view_proj = (proj * view).to_cols_array_2d();
        self.position = rig.position().to_array();
        self.fovy = rig.fov_deg();
        self.forward = rig.look().to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::FirstPersonCamera;

    #[test]
    fn uniform_matches_wgsl_size() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 96);
    }

    #[test]
    fn update_tracks_rig_state() {
        let rig =
            CameraRig::FirstPerson(FirstPersonCamera::new(Vec3::new(
                1.0, 2.0, 3.0,
            )));
        let mut uniform = CameraUniform::new();
        uniform.update(&rig, 1.5, 0.1, 200.0);

        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fovy, 45.0);
        let fwd = Vec3::from_array(uniform.forward);
        assert!((fwd - rig.look()).length() < 1e-6);
    }
}
