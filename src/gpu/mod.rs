//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, the forward scene
//! pipeline, and shared uniform bind-group plumbing.

/// Forward pipeline, depth target, and uniform bind-group helpers.
pub mod pipeline;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
