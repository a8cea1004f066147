//! Free-flying first-person camera.
//!
//! Orientation is cumulative: every [`rotate`](FirstPersonCamera::rotate)
//! call adds the given deltas onto the stored yaw/pitch, which matches
//! relative mouse input. Translation never touches orientation.

use glam::{Mat4, Vec3};

use super::basis::{self, Basis};

/// Camera with externally-driven position and accumulated yaw/pitch.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    fov_deg: f32,
    basis: Basis,
}

impl FirstPersonCamera {
    /// Create a camera at `position`, facing -Z (yaw pi), level pitch.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, std::f32::consts::PI, 0.0)
    }

    /// Create a camera with an explicit yaw/pitch (radians).
    #[must_use]
    pub fn with_orientation(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let pitch = basis::clamp_pitch(pitch);
        Self {
            position,
            yaw,
            pitch,
            fov_deg: 45.0,
            basis: Basis::from_yaw_pitch(yaw, pitch),
        }
    }

    /// Accumulate rotation deltas, in degrees.
    ///
    /// Pitch is clamped just short of +-90 degrees so the basis never
    /// degenerates at the poles.
    pub fn rotate(&mut self, delta_yaw_deg: f32, delta_pitch_deg: f32) {
        self.yaw += delta_yaw_deg.to_radians();
        self.pitch =
            basis::clamp_pitch(self.pitch + delta_pitch_deg.to_radians());
        self.basis = Basis::from_yaw_pitch(self.yaw, self.pitch);
    }

    /// Translate by a world-space offset (typically a basis direction
    /// pre-scaled by speed and elapsed time). Orientation is unaffected.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Set the position directly. Orientation is unaffected.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Current world-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The point the camera looks at: `position + look`.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.position + self.basis.look
    }

    /// Current yaw in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction.
    #[must_use]
    pub fn look(&self) -> Vec3 {
        self.basis.look
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Field of view in degrees.
    #[must_use]
    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    /// Set the field of view, clamped to [1, 120] degrees.
    pub fn set_fov_deg(&mut self, fov_deg: f32) {
        self.fov_deg = basis::clamp_fov(fov_deg);
    }

    /// View matrix from the current position/target/up.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target(), self.basis.up)
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn rotation_accumulates() {
        let mut cam = FirstPersonCamera::new(Vec3::ZERO);
        let start_yaw = cam.yaw();
        cam.rotate(10.0, 5.0);
        cam.rotate(10.0, 5.0);
        assert!((cam.yaw() - (start_yaw + 20f32.to_radians())).abs() < EPS);
        assert!((cam.pitch() - 10f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn pitch_clamps_at_poles() {
        let mut cam = FirstPersonCamera::new(Vec3::ZERO);
        cam.rotate(0.0, 400.0);
        assert!(cam.pitch() <= basis::PITCH_LIMIT);
        // Basis stays well-defined at the clamp.
        assert!((cam.look().length() - 1.0).abs() < EPS);
        assert!((cam.right().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn translate_along_look_preserves_orientation() {
        // Spawn orientation: yaw pi, pitch 0.
        let mut cam = FirstPersonCamera::new(Vec3::new(1.0, 2.0, 3.0));
        let look = cam.look();
        let right = cam.right();
        let up = cam.up();
        let start = cam.position();

        cam.translate(look * 5.0);

        assert!((cam.position() - (start + look * 5.0)).length() < EPS);
        assert_eq!(cam.look(), look);
        assert_eq!(cam.right(), right);
        assert_eq!(cam.up(), up);
    }

    #[test]
    fn target_follows_position() {
        let mut cam = FirstPersonCamera::new(Vec3::ZERO);
        cam.set_position(Vec3::new(0.0, 7.0, 0.0));
        assert!((cam.target() - (cam.position() + cam.look())).length() < EPS);
    }

    #[test]
    fn fov_clamp_laws() {
        let mut cam = FirstPersonCamera::new(Vec3::ZERO);
        cam.set_fov_deg(0.0);
        assert_eq!(cam.fov_deg(), 1.0);
        cam.set_fov_deg(500.0);
        assert_eq!(cam.fov_deg(), 120.0);
    }

    #[test]
    fn view_matrix_transforms_target_onto_forward_axis() {
        let cam = FirstPersonCamera::new(Vec3::new(0.0, 0.0, 10.0));
        let view = cam.view_matrix();
        // The target sits one unit in front of the eye: -Z in view space.
        let t = view.transform_point3(cam.target());
        assert!(t.x.abs() < EPS);
        assert!(t.y.abs() < EPS);
        assert!((t.z + 1.0).abs() < EPS);
    }
}
