//! Forward scene pipeline and shared uniform plumbing.
//!
//! One pipeline renders everything: the scene shader consumes the camera
//! uniform (group 0), the lighting uniform (group 1), and a per-placement
//! model/material uniform (group 2), all plain uniform buffers.

use wgpu::util::DeviceExt;

use super::render_context::RenderContext;
use crate::mesh::Vertex;

/// Depth buffer format shared by the pipeline and its target.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A uniform buffer with its bind group layout and bind group.
///
/// Camera, lighting, and per-placement model blocks all follow this
/// shape: one buffer, one binding at index 0.
pub struct UniformBinding {
    /// The underlying uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout describing the single buffer binding.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the buffer.
    pub bind_group: wgpu::BindGroup,
}

impl UniformBinding {
    /// Create a uniform buffer from `contents` with a single-entry bind
    /// group visible to the given shader stages.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        visibility: wgpu::ShaderStages,
        contents: &[u8],
    ) -> Self {
        let layout = uniform_layout(device, label, visibility);
        let (buffer, bind_group) =
            uniform_buffer(device, label, &layout, contents);
        Self {
            buffer,
            layout,
            bind_group,
        }
    }
}

/// Single-entry uniform bind group layout at binding 0.
#[must_use]
pub fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// Uniform buffer initialized from `contents`, bound at binding 0 of a
/// bind group with the given layout.
#[must_use]
pub fn uniform_buffer(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    contents: &[u8],
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    (buffer, bind_group)
}

/// Depth render target sized to the surface.
pub struct DepthTarget {
    /// A full-texture view usable as a depth attachment.
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    /// Create a depth texture with the given dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Target"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view =
            texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { view }
    }
}

/// Create the forward scene pipeline.
///
/// Bind group layouts are expected in shader group order: camera,
/// lighting, model.
pub(crate) fn create_scene_pipeline(
    context: &RenderContext,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let shader = context.device.create_shader_module(
        wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../shaders/scene.wgsl").into(),
            ),
        },
    );

    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts,
            push_constant_ranges: &[],
        },
    );

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
