//! Sphere-bound orbit camera.
//!
//! Unlike the first-person scheme, [`rotate`](OrbitCamera::rotate) takes
//! absolute angles: the position is a point on a sphere of the stored
//! radius around the target, so each call is idempotent for a given
//! (yaw, pitch) pair.

use glam::{Mat4, Vec3};

use super::basis::{self, Basis, WORLD_UP};

/// Minimum orbit radius.
pub const MIN_RADIUS: f32 = 2.0;

/// Maximum orbit radius.
pub const MAX_RADIUS: f32 = 80.0;

/// Camera orbiting a fixed pivot at a clamped radius.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
    fov_deg: f32,
    position: Vec3,
    basis: Basis,
}

impl OrbitCamera {
    /// Create an orbit camera around `target` at the given radius.
    #[must_use]
    pub fn new(target: Vec3, radius: f32) -> Self {
        let mut cam = Self {
            target,
            radius: radius.clamp(MIN_RADIUS, MAX_RADIUS),
            yaw: 0.0,
            pitch: 0.0,
            fov_deg: 45.0,
            position: Vec3::ZERO,
            basis: Basis::default(),
        };
        cam.update_position();
        cam
    }

    /// Set absolute orbit angles, in degrees.
    ///
    /// Pitch is clamped just short of +-90 degrees; the position is
    /// re-derived in spherical coordinates around the target.
    pub fn rotate(&mut self, yaw_deg: f32, pitch_deg: f32) {
        self.yaw = yaw_deg.to_radians();
        self.pitch = basis::clamp_pitch(pitch_deg.to_radians());
        self.update_position();
    }

    /// Set the pivot point the camera orbits and looks at.
    pub fn set_look_at(&mut self, target: Vec3) {
        self.target = target;
        self.update_position();
    }

    /// Set the orbit radius, clamped to [2, 80].
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
        self.update_position();
    }

    /// Current orbit radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The pivot point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Derived world-space position on the orbit sphere.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
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

    /// Unit view direction (from the camera toward the target).
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

    /// View matrix looking from the orbit position at the target.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, WORLD_UP)
    }

    /// Re-derive position and basis from target/radius/yaw/pitch.
    fn update_position(&mut self) {
        self.position =
            self.target + self.radius * basis::direction(self.yaw, self.pitch);
        self.basis = Basis::from_look(self.target - self.position);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn rotate_is_idempotent() {
        let mut a = OrbitCamera::default();
        a.rotate(33.0, 21.0);
        let first = a.position();
        a.rotate(33.0, 21.0);
        assert_eq!(first, a.position());
    }

    #[test]
    fn full_turn_returns_to_same_position() {
        let mut a = OrbitCamera::default();
        a.rotate(45.0, 10.0);
        let reference = a.position();
        a.rotate(45.0 + 360.0, 10.0);
        assert!((a.position() - reference).length() < EPS);
    }

    #[test]
    fn radius_clamp_laws() {
        let mut cam = OrbitCamera::default();
        cam.set_radius(1.0);
        assert_eq!(cam.radius(), 2.0);
        cam.set_radius(1000.0);
        assert_eq!(cam.radius(), 80.0);
    }

    #[test]
    fn position_sits_on_the_orbit_sphere() {
        let mut cam = OrbitCamera::new(Vec3::new(3.0, 1.0, -2.0), 12.0);
        cam.rotate(72.0, -15.0);
        let r = (cam.position() - cam.target()).length();
        assert!((r - 12.0).abs() < EPS);
    }

    #[test]
    fn look_points_at_target() {
        let mut cam = OrbitCamera::new(Vec3::new(5.0, 0.0, 5.0), 20.0);
        cam.rotate(120.0, 30.0);
        let to_target = (cam.target() - cam.position()).normalize();
        assert!((cam.look() - to_target).length() < EPS);
    }

    #[test]
    fn basis_is_orthonormal_after_rotate() {
        let mut cam = OrbitCamera::default();
        cam.rotate(200.0, -40.0);
        assert!(cam.look().dot(cam.right()).abs() < EPS);
        assert!(cam.look().dot(cam.up()).abs() < EPS);
        assert!(cam.right().dot(cam.up()).abs() < EPS);
        assert!((cam.up().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn view_matrix_centers_the_target() {
        let mut cam = OrbitCamera::new(Vec3::new(1.0, 2.0, 3.0), 10.0);
        cam.rotate(60.0, 20.0);
        let t = cam.view_matrix().transform_point3(cam.target());
        assert!(t.x.abs() < EPS);
        assert!(t.y.abs() < EPS);
        assert!((t.z + 10.0).abs() < EPS);
    }
}
