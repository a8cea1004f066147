//! The sandbox's fixed light set and its GPU uniform.
//!
//! Three lights, mirroring the demo scenes: a sun (directional), one
//! point light, and a spotlight that rides the camera. The parameter
//! block lives in a single uniform buffer re-uploaded when the spotlight
//! moves.

use glam::Vec3;

use crate::gpu::pipeline::UniformBinding;
use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// Lighting configuration shared across all draws.
/// NOTE: Must match the WGSL struct layout exactly (128 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Sun direction (normalized).
    pub sun_dir: [f32; 3],
    pub(crate) _pad0: f32,
    /// Sun color.
    pub sun_color: [f32; 3],
    pub(crate) _pad1: f32,
    /// Point light position.
    pub point_pos: [f32; 3],
    pub(crate) _pad2: f32,
    /// Point light color.
    pub point_color: [f32; 3],
    /// Point light attenuation: constant term.
    pub point_constant: f32,
    /// Point light attenuation: linear term.
    pub point_linear: f32,
    /// Point light attenuation: quadratic term.
    pub point_quadratic: f32,
    /// Ambient strength.
    pub ambient: f32,
    pub(crate) _pad3: f32,
    /// Spotlight position (follows the camera).
    pub spot_pos: [f32; 3],
    /// Cosine of the spotlight inner cone angle.
    pub spot_cos_inner: f32,
    /// Spotlight direction (follows the camera look vector).
    pub spot_dir: [f32; 3],
    /// Cosine of the spotlight outer cone angle.
    pub spot_cos_outer: f32,
    /// Spotlight color.
    pub spot_color: [f32; 3],
    pub(crate) _pad4: f32,
}

impl LightingUniform {
    /// Build the uniform from options. The spotlight starts at the
    /// origin facing -Z until the first camera update.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            sun_dir: Vec3::from_array(options.sun_direction)
                .normalize_or_zero()
                .to_array(),
            _pad0: 0.0,
            sun_color: options.sun_color,
            _pad1: 0.0,
            point_pos: options.point_position,
            _pad2: 0.0,
            point_color: options.point_color,
            point_constant: options.point_constant,
            point_linear: options.point_linear,
            point_quadratic: options.point_quadratic,
            ambient: options.ambient,
            _pad3: 0.0,
            spot_pos: [0.0; 3],
            spot_cos_inner: options.spot_inner_deg.to_radians().cos(),
            spot_dir: [0.0, 0.0, -1.0],
            spot_cos_outer: options.spot_outer_deg.to_radians().cos(),
            spot_color: options.spot_color,
            _pad4: 0.0,
        }
    }
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

/// GPU residency for the light set.
pub struct Lighting {
    /// Current CPU-side parameter block.
    pub uniform: LightingUniform,
    /// Buffer and bind group (group 1 in the scene shader).
    pub binding: UniformBinding,
}

impl Lighting {
    /// Upload the light set described by `options`.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightingUniform::from_options(options);
        let binding = UniformBinding::new(
            &context.device,
            "Lighting Buffer",
            wgpu::ShaderStages::FRAGMENT,
            bytemuck::cast_slice(&[uniform]),
        );
        Self { uniform, binding }
    }

    /// Move the spotlight to the camera and re-upload the block.
    pub fn update_spotlight(
        &mut self,
        queue: &wgpu::Queue,
        position: Vec3,
        direction: Vec3,
    ) {
        self.uniform.spot_pos = position.to_array();
        self.uniform.spot_dir = direction.to_array();
        queue.write_buffer(
            &self.binding.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_size() {
        assert_eq!(std::mem::size_of::<LightingUniform>(), 128);
    }

    #[test]
    fn sun_direction_is_normalized() {
        let uniform = LightingUniform::default();
        let len = Vec3::from_array(uniform.sun_dir).length();
        assert!((len - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cone_cosines_are_ordered() {
        // Inner cone is narrower, so its cosine is larger.
        let uniform = LightingUniform::default();
        assert!(uniform.spot_cos_inner > uniform.spot_cos_outer);
    }
}
