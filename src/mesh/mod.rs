//! Mesh ingestion: OBJ files into flat, GPU-uploadable vertex streams.
//!
//! A [`Mesh`] is triangle soup: one [`Vertex`] per triangle corner, with
//! shared corners across faces duplicated as distinct entries, drawn
//! non-indexed. Loading happens once at startup per asset and the vertex
//! data is immutable afterwards; the GPU buffer is owned by the mesh and
//! released when the mesh is dropped.

mod obj;

use std::path::Path;

use wgpu::util::DeviceExt;

pub use obj::ObjError;

/// One triangle corner: position, normal, texture coordinate.
///
/// Tightly packed, stride 8 floats. Attributes the source file did not
/// supply stay zeroed; the shading stage treats a zero normal as unlit.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal, or zero if the source had none.
    pub normal: [f32; 3],
    /// Texture coordinate, or zero if the source had none.
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// The all-zero vertex, the starting point for resolution.
    pub const ZERO: Self = Self {
        position: [0.0; 3],
        normal: [0.0; 3],
        tex_coord: [0.0; 2],
    };

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 24,
            shader_location: 2,
        },
    ];

    /// Vertex buffer layout matching the packed struct.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// GPU residency for a loaded mesh.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

/// A triangle-soup mesh loaded from an OBJ file.
///
/// Lifecycle: default-constructed empty, populated by
/// [`load_obj`](Self::load_obj) (reloading replaces prior contents),
/// uploaded with [`upload`](Self::upload), drawn every frame with
/// [`draw`](Self::draw). An unloaded mesh reports zero geometry and
/// drawing it is a no-op.
#[derive(Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    loaded: bool,
    gpu: Option<GpuMesh>,
}

impl Mesh {
    /// Create an empty, unloaded mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and resolve an OBJ file, replacing any prior contents.
    ///
    /// On any failure the mesh keeps its previous state: rejection of a
    /// non-`.obj` path and unreadable files happen before parsing, and a
    /// parse that fails (out-of-range index) never partially commits.
    pub fn load_obj(&mut self, path: &Path) -> Result<(), ObjError> {
        obj::check_extension(path)?;
        let src = std::fs::read_to_string(path).map_err(ObjError::Io)?;
        let vertices = obj::parse(&src)?;
        log::info!(
            "loaded {} ({} vertices, {} faces)",
            path.display(),
            vertices.len(),
            vertices.len() / 3
        );
        self.vertices = vertices;
        self.loaded = true;
        // Any previous buffer no longer matches; re-upload required.
        self.gpu = None;
        Ok(())
    }

    /// Load from an in-memory OBJ document instead of a file.
    pub fn load_obj_source(&mut self, src: &str) -> Result<(), ObjError> {
        self.vertices = obj::parse(src)?;
        self.loaded = true;
        self.gpu = None;
        Ok(())
    }

    /// Whether a load has completed successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of vertices in the soup. Always a multiple of three.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The resolved vertex stream.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Create the GPU vertex buffer for the current contents.
    ///
    /// A mesh with no vertices (or no completed load) uploads nothing.
    pub fn upload(&mut self, device: &wgpu::Device) {
        if !self.loaded || self.vertices.is_empty() {
            return;
        }
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        self.gpu = Some(GpuMesh {
            vertex_buffer,
            vertex_count: self.vertices.len() as u32,
        });
    }

    /// Bind the vertex buffer and issue one non-indexed triangle-list
    /// draw over the full soup. No-op unless loaded and uploaded.
    ///
    /// Caller must set the pipeline and bind groups first.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        let Some(gpu) = &self.gpu else {
            return;
        };
        render_pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        render_pass.draw(0..gpu.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_eight_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn default_mesh_reports_zero_geometry() {
        let mesh = Mesh::new();
        assert!(!mesh.is_loaded());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn load_rejects_wrong_extension_without_side_effects() {
        let mut mesh = Mesh::new();
        let err = mesh.load_obj(Path::new("model.fbx")).unwrap_err();
        assert!(matches!(err, ObjError::NotObj(_)));
        assert!(!mesh.is_loaded());
    }

    #[test]
    fn load_reports_missing_file() {
        let mut mesh = Mesh::new();
        let err = mesh
            .load_obj(Path::new("does/not/exist.obj"))
            .unwrap_err();
        assert!(matches!(err, ObjError::Io(_)));
        assert!(!mesh.is_loaded());
    }

    #[test]
    fn failed_first_load_leaves_mesh_empty() {
        let mut mesh = Mesh::new();
        let err = mesh
            .load_obj_source("v 0 0 0\nf 1 2 99\n")
            .unwrap_err();
        assert!(matches!(err, ObjError::IndexOutOfRange { .. }));
        assert!(!mesh.is_loaded());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn failed_parse_keeps_prior_contents() {
        let mut mesh = Mesh::new();
        mesh.load_obj_source("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
            .unwrap();
        assert_eq!(mesh.vertex_count(), 3);

        let err = mesh
            .load_obj_source("v 0 0 0\nf 1 2 99\n")
            .unwrap_err();
        assert!(matches!(err, ObjError::IndexOutOfRange { .. }));
        // The earlier soup survives intact.
        assert!(mesh.is_loaded());
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn reload_replaces_contents() {
        let mut mesh = Mesh::new();
        mesh.load_obj_source("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
            .unwrap();
        mesh.load_obj_source(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3\nf 2 4 3\n",
        )
        .unwrap();
        assert_eq!(mesh.face_count(), 2);
    }

    #[test]
    fn empty_file_loads_but_draws_nothing() {
        let mut mesh = Mesh::new();
        mesh.load_obj_source("# header only\n").unwrap();
        assert!(mesh.is_loaded());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn soup_length_is_always_a_multiple_of_three() {
        let mut mesh = Mesh::new();
        mesh.load_obj_source(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nf 1 2 3 1\nf 3 2 1\n",
        )
        .unwrap();
        assert_eq!(mesh.vertex_count() % 3, 0);
        assert_eq!(mesh.face_count(), 2);
    }
}
