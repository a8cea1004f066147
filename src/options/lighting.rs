use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Light placement and intensity parameters.
///
/// The light set is fixed: one sun (directional), one point light, and a
/// spotlight that follows the camera. Cone angles are stored in degrees
/// here and converted to cosines at upload.
pub struct LightingOptions {
    /// Ambient strength applied to every surface.
    pub ambient: f32,
    /// Sun direction (world space, need not be normalized).
    pub sun_direction: [f32; 3],
    /// Sun color.
    pub sun_color: [f32; 3],
    /// Point light position.
    pub point_position: [f32; 3],
    /// Point light color.
    pub point_color: [f32; 3],
    /// Point light attenuation: constant term.
    pub point_constant: f32,
    /// Point light attenuation: linear term.
    pub point_linear: f32,
    /// Point light attenuation: quadratic term.
    pub point_quadratic: f32,
    /// Spotlight inner cone angle, degrees.
    pub spot_inner_deg: f32,
    /// Spotlight outer cone angle, degrees.
    pub spot_outer_deg: f32,
    /// Spotlight color.
    pub spot_color: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.25,
            // Late-afternoon sun, high and slightly to the side.
            sun_direction: [-0.3, -0.9, -0.3],
            sun_color: [1.0, 0.95, 0.85],
            point_position: [0.0, 4.0, 0.0],
            point_color: [1.0, 0.8, 0.6],
            point_constant: 1.0,
            point_linear: 0.07,
            point_quadratic: 0.017,
            spot_inner_deg: 15.0,
            spot_outer_deg: 20.0,
            spot_color: [1.0, 1.0, 1.0],
        }
    }
}
