//! Tagged union over the two camera variants.
//!
//! The render loop owns a `CameraRig` and dispatches on it; neither
//! variant knows the other exists. Switching schemes preserves the field
//! of view and converts the pose so the view does not jump.

use glam::{Mat4, Vec3};

use super::first_person::FirstPersonCamera;
use super::orbit::OrbitCamera;

/// The active camera: first-person or orbit.
#[derive(Debug, Clone)]
pub enum CameraRig {
    /// Free-flying camera with cumulative orientation.
    FirstPerson(FirstPersonCamera),
    /// Sphere-bound camera around a fixed pivot.
    Orbit(OrbitCamera),
}

impl CameraRig {
    /// View matrix of the active variant.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        match self {
            Self::FirstPerson(cam) => cam.view_matrix(),
            Self::Orbit(cam) => cam.view_matrix(),
        }
    }

    /// World-space eye position of the active variant.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        match self {
            Self::FirstPerson(cam) => cam.position(),
            Self::Orbit(cam) => cam.position(),
        }
    }

    /// Unit view direction of the active variant.
    #[must_use]
    pub fn look(&self) -> Vec3 {
        match self {
            Self::FirstPerson(cam) => cam.look(),
            Self::Orbit(cam) => cam.look(),
        }
    }

    /// Unit right vector of the active variant.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        match self {
            Self::FirstPerson(cam) => cam.right(),
            Self::Orbit(cam) => cam.right(),
        }
    }

    /// Unit up vector of the active variant.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        match self {
            Self::FirstPerson(cam) => cam.up(),
            Self::Orbit(cam) => cam.up(),
        }
    }

    /// Field of view in degrees.
    #[must_use]
    pub fn fov_deg(&self) -> f32 {
        match self {
            Self::FirstPerson(cam) => cam.fov_deg(),
            Self::Orbit(cam) => cam.fov_deg(),
        }
    }

    /// Set the field of view, clamped to [1, 120] degrees.
    pub fn set_fov_deg(&mut self, fov_deg: f32) {
        match self {
            Self::FirstPerson(cam) => cam.set_fov_deg(fov_deg),
            Self::Orbit(cam) => cam.set_fov_deg(fov_deg),
        }
    }

    /// Whether the first-person scheme is active.
    #[must_use]
    pub fn is_first_person(&self) -> bool {
        matches!(self, Self::FirstPerson(_))
    }

    /// Switch to the other scheme, preserving FOV and converting the pose.
    ///
    /// First-person to orbit keeps the eye on a sphere around the old
    /// orbit target (the world origin on first switch); orbit to
    /// first-person spawns at the orbit position facing the pivot.
    pub fn toggle(&mut self) {
        let fov = self.fov_deg();
        *self = match self {
            Self::FirstPerson(cam) => {
                let target = Vec3::ZERO;
                let offset = cam.position() - target;
                let radius = offset.length().max(super::orbit::MIN_RADIUS);
                let mut orbit = OrbitCamera::new(target, radius);
                // Recover the spherical angles of the current eye point.
                let dir = offset / offset.length().max(f32::EPSILON);
                let yaw = dir.x.atan2(dir.z);
                let pitch = dir.y.clamp(-1.0, 1.0).asin();
                orbit.rotate(yaw.to_degrees(), pitch.to_degrees());
                Self::Orbit(orbit)
            }
            Self::Orbit(cam) => {
                // Facing the pivot: the eye direction mirrored through it.
                let yaw = cam.yaw() + std::f32::consts::PI;
                let pitch = -cam.pitch();
                Self::FirstPerson(FirstPersonCamera::with_orientation(
                    cam.position(),
                    yaw,
                    pitch,
                ))
            }
        };
        self.set_fov_deg(fov);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::FirstPerson(FirstPersonCamera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn toggle_preserves_fov() {
        let mut rig = CameraRig::default();
        rig.set_fov_deg(72.0);
        rig.toggle();
        assert_eq!(rig.fov_deg(), 72.0);
        rig.toggle();
        assert_eq!(rig.fov_deg(), 72.0);
    }

    #[test]
    fn orbit_to_first_person_keeps_eye_and_aim() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 10.0);
        orbit.rotate(40.0, 25.0);
        let eye = orbit.position();
        let look_before = orbit.look();

        let mut rig = CameraRig::Orbit(orbit);
        rig.toggle();

        assert!((rig.position() - eye).length() < EPS);
        assert!((rig.look() - look_before).length() < EPS);
        assert!(rig.is_first_person());
    }

    #[test]
    fn first_person_to_orbit_keeps_eye() {
        let mut cam = FirstPersonCamera::new(Vec3::new(0.0, 3.0, 8.0));
        cam.rotate(15.0, -10.0);
        let eye = cam.position();

        let mut rig = CameraRig::FirstPerson(cam);
        rig.toggle();

        assert!(!rig.is_first_person());
        assert!((rig.position() - eye).length() < EPS);
    }
}
