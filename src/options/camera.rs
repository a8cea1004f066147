use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Initial vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// First-person translation speed, world units per second.
    pub move_speed: f32,
    /// Mouse-look sensitivity, degrees per pixel.
    pub mouse_sensitivity: f32,
    /// Scroll sensitivity: FOV degrees (first-person) or radius units
    /// (orbit) per scroll line.
    pub zoom_sensitivity: f32,
    /// Floor height the first-person camera is kept above, if any.
    /// Applied by the input layer; the camera itself does no collision.
    pub ground_height: Option<f32>,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 200.0,
            move_speed: 10.0,
            mouse_sensitivity: 0.1,
            zoom_sensitivity: 1.0,
            ground_height: None,
        }
    }
}
