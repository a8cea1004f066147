//! Shared orientation math for both camera variants.
//!
//! A camera orientation is a yaw/pitch pair in radians; the derived
//! `{look, right, up}` triple must be mutually perpendicular and
//! unit-length after every update. Pitch is kept strictly away from the
//! poles so `look` never becomes parallel to the world up vector, which
//! would make the `look x up` cross product numerically unstable.

use glam::Vec3;

/// World-space up direction. All basis derivations are relative to +Y.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch clamp margin below +-90 degrees, in radians.
pub const PITCH_MARGIN: f32 = 0.1;

/// Maximum pitch magnitude: just inside the poles.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - PITCH_MARGIN;

/// Minimum stored field of view, in degrees.
pub const MIN_FOV_DEG: f32 = 1.0;

/// Maximum stored field of view, in degrees.
pub const MAX_FOV_DEG: f32 = 120.0;

/// Clamp a pitch angle (radians) inside the pole margin.
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Clamp a field of view (degrees) to the supported range.
#[must_use]
pub fn clamp_fov(fov_deg: f32) -> f32 {
    fov_deg.clamp(MIN_FOV_DEG, MAX_FOV_DEG)
}

/// Unit direction for a yaw/pitch pair (radians).
///
/// Yaw 0 faces +Z; yaw pi faces -Z; positive pitch tilts toward +Y.
#[must_use]
pub fn direction(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
}

/// Orthonormal camera basis derived from a view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Unit view direction.
    pub look: Vec3,
    /// Unit right vector, perpendicular to `look` and the world up.
    pub right: Vec3,
    /// Unit up vector, perpendicular to `look` and `right`.
    pub up: Vec3,
}

impl Basis {
    /// Derive the basis for a yaw/pitch pair (radians).
    ///
    /// The caller is responsible for keeping pitch inside
    /// [`PITCH_LIMIT`]; at the poles the derivation degenerates.
    #[must_use]
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        Self::from_look(direction(yaw, pitch))
    }

    /// Derive the basis from an already-normalized view direction.
    #[must_use]
    pub fn from_look(look: Vec3) -> Self {
        let look = look.normalize();
        let right = look.cross(WORLD_UP).normalize();
        let up = right.cross(look).normalize();
        Self { look, right, up }
    }
}

impl Default for Basis {
    /// Facing -Z (yaw pi, pitch 0), the first-person spawn orientation.
    fn default() -> Self {
        Self::from_yaw_pitch(std::f32::consts::PI, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn basis_is_orthonormal_inside_pitch_clamp() {
        // Sweep a grid of yaw/pitch pairs strictly inside the clamp.
        for yaw_step in 0..12 {
            for pitch_step in -4..=4 {
                let yaw = yaw_step as f32 * std::f32::consts::TAU / 12.0;
                let pitch = pitch_step as f32 * (PITCH_LIMIT * 0.99) / 4.0;
                let b = Basis::from_yaw_pitch(yaw, pitch);

                assert!((b.look.length() - 1.0).abs() < EPS);
                assert!((b.right.length() - 1.0).abs() < EPS);
                assert!((b.up.length() - 1.0).abs() < EPS);
                assert!(b.look.dot(b.right).abs() < EPS);
                assert!(b.look.dot(b.up).abs() < EPS);
                assert!(b.right.dot(b.up).abs() < EPS);
            }
        }
    }

    #[test]
    fn direction_matches_spherical_formula() {
        let d = direction(0.3, 0.2);
        assert!((d.x - 0.2f32.cos() * 0.3f32.sin()).abs() < EPS);
        assert!((d.y - 0.2f32.sin()).abs() < EPS);
        assert!((d.z - 0.2f32.cos() * 0.3f32.cos()).abs() < EPS);
        assert!((d.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn default_faces_negative_z() {
        let b = Basis::default();
        assert!((b.look - Vec3::NEG_Z).length() < EPS);
        assert!(b.up.dot(WORLD_UP) > 0.99);
    }

    #[test]
    fn clamp_pitch_stops_short_of_poles() {
        assert_eq!(clamp_pitch(10.0), PITCH_LIMIT);
        assert_eq!(clamp_pitch(-10.0), -PITCH_LIMIT);
        assert_eq!(clamp_pitch(0.5), 0.5);
    }

    #[test]
    fn clamp_fov_laws() {
        assert_eq!(clamp_fov(0.0), 1.0);
        assert_eq!(clamp_fov(500.0), 120.0);
        assert_eq!(clamp_fov(45.0), 45.0);
    }
}
