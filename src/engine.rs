//! Per-frame render engine.
//!
//! Owns the GPU context, the forward pipeline, the camera rig and its
//! uniform, the light set, and the loaded scene. One render pass per
//! frame: camera and spotlight uniforms are rebuilt from the rig (never
//! cached across a mutation), then every placement is drawn in table
//! order. All state lives here; nothing is process-global.

use std::path::Path;

use crate::camera::{CameraRig, CameraUniform, FirstPersonCamera};
use crate::error::SylvaError;
use crate::gpu::pipeline::{self, DepthTarget, UniformBinding};
use crate::gpu::render_context::RenderContext;
use crate::lighting::Lighting;
use crate::options::Options;
use crate::scene::{Scene, SceneSpec};
use crate::util::frame_timing::FrameTiming;

/// Per-placement data handed to the shading stage.
/// NOTE: Must match the WGSL struct layout exactly (96 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
    base_color: [f32; 3],
    shininess: f32,
    specular: [f32; 3],
    _pad: f32,
}

/// One placement's draw record: which model, and its bind group.
struct DrawItem {
    model: String,
    bind_group: wgpu::BindGroup,
}

/// The sandbox render engine.
///
/// Construct with [`new`](Self::new) (async: wgpu adapter/device
/// requests), then drive from the frame loop: mutate the rig through
/// [`rig_mut`](Self::rig_mut) and call [`render`](Self::render) once per
/// redraw.
pub struct RenderEngine {
    context: RenderContext,
    depth: DepthTarget,
    pipeline: wgpu::RenderPipeline,
    rig: CameraRig,
    camera_uniform: CameraUniform,
    camera_binding: UniformBinding,
    lighting: Lighting,
    scene: Scene,
    draw_items: Vec<DrawItem>,
    timing: FrameTiming,
    options: Options,
}

impl RenderEngine {
    /// Initial first-person spawn point, matching the demo scene.
    const SPAWN: glam::Vec3 = glam::Vec3::new(0.0, 3.5, 10.0);

    /// Create the engine for a window surface, loading `spec`'s assets
    /// relative to `base_dir`.
    ///
    /// Individual assets that fail to load are skipped (logged); GPU
    /// initialization failure is fatal.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
        spec: &SceneSpec,
        base_dir: &Path,
    ) -> Result<Self, SylvaError> {
        let context = RenderContext::new(window, size).await?;
        let depth = DepthTarget::new(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let mut rig =
            CameraRig::FirstPerson(FirstPersonCamera::new(Self::SPAWN));
        rig.set_fov_deg(options.camera.fovy);

        let camera_uniform = CameraUniform::new();
        let camera_binding = UniformBinding::new(
            &context.device,
            "Camera Buffer",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            bytemuck::cast_slice(&[camera_uniform]),
        );

        let lighting = Lighting::new(&context, &options.lighting);

        let model_layout = pipeline::uniform_layout(
            &context.device,
            "Model Bind Group Layout",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );

        let render_pipeline = pipeline::create_scene_pipeline(
            &context,
            &[
                &camera_binding.layout,
                &lighting.binding.layout,
                &model_layout,
            ],
        );

        let mut scene = Scene::from_spec(spec, base_dir);
        for (_, model) in scene.models_mut() {
            model.mesh.upload(&context.device);
        }

        // Placements are static, so each one gets its model/material
        // block uploaded once here.
        let draw_items = scene
            .draws()
            .map(|(placement, model)| {
                let uniform = ModelUniform {
                    model: Scene::model_matrix(placement, model)
                        .to_cols_array_2d(),
                    base_color: model.material.base_color,
                    shininess: model.material.shininess,
                    specular: model.material.specular,
                    _pad: 0.0,
                };
                let (_, bind_group) = pipeline::uniform_buffer(
                    &context.device,
                    "Model Buffer",
                    &model_layout,
                    bytemuck::cast_slice(&[uniform]),
                );
                DrawItem {
                    model: placement.model.clone(),
                    bind_group,
                }
            })
            .collect();

        let timing = FrameTiming::new(options.display.target_fps);

        Ok(Self {
            context,
            depth,
            pipeline: render_pipeline,
            rig,
            camera_uniform,
            camera_binding,
            lighting,
            scene,
            draw_items,
            timing,
            options,
        })
    }

    /// Reconfigure the surface and depth target for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth = DepthTarget::new(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// The camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable access to the camera rig, for input handling.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// The engine's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The loaded scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Render one frame.
    ///
    /// Uniforms are rebuilt from the rig's current state before
    /// encoding. Returns surface errors to the caller; `Lost` and
    /// `Outdated` are recoverable by resizing.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.timing.should_render() {
            return Ok(());
        }

        self.camera_uniform.update(
            &self.rig,
            self.context.aspect(),
            self.options.camera.znear,
            self.options.camera.zfar,
        );
        self.context.queue.write_buffer(
            &self.camera_binding.buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
        self.lighting.update_spotlight(
            &self.context.queue,
            self.rig.position(),
            self.rig.look(),
        );

        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            },
        );

        {
            let clear = self.options.display.clear_color;
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(clear[0]),
                                    g: f64::from(clear[1]),
                                    b: f64::from(clear[2]),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.camera_binding.bind_group, &[]);
            pass.set_bind_group(1, &self.lighting.binding.bind_group, &[]);

            for item in &self.draw_items {
                let Some(model) = self.scene.model(&item.model) else {
                    continue;
                };
                pass.set_bind_group(2, &item.bind_group, &[]);
                model.mesh.draw(&mut pass);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        self.timing.end_frame();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    #[test]
    fn model_uniform_matches_wgsl_size() {
        assert_eq!(std::mem::size_of::<ModelUniform>(), 96);
    }

    #[test]
    fn model_uniform_matrix_round_trips() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let uniform = ModelUniform {
            model: m.to_cols_array_2d(),
            base_color: [1.0; 3],
            shininess: 32.0,
            specular: [0.5; 3],
            _pad: 0.0,
        };
        assert_eq!(Mat4::from_cols_array_2d(&uniform.model), m);
    }
}
