// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Documentation
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! Minimal real-time 3D model sandbox built on wgpu.
//!
//! Sylva loads triangle meshes from Wavefront OBJ text files, maintains a
//! movable viewpoint under two control schemes (first-person and orbit),
//! and feeds per-frame transformation and lighting data to a forward
//! rasterization pipeline.
//!
//! # Key entry points
//!
//! - [`mesh::Mesh`] - OBJ ingestion into a flat, GPU-uploadable vertex soup
//! - [`camera::CameraRig`] - the first-person / orbit camera pair
//! - [`scene::Scene`] - the data-driven model table and placement list
//! - [`viewer::Viewer`] - a standalone window running the frame loop
//!   (behind the `viewer` feature, on by default)
//!
//! # Architecture
//!
//! The camera and mesh modules are pure CPU state with no GPU types in
//! their core paths, so all the math and parsing is unit-testable. The
//! [`engine::RenderEngine`] owns the wgpu device/surface and drives one
//! render pass per frame over the scene's placements; the viewer owns the
//! winit event loop and forwards input to the engine. There is exactly one
//! logical actor: everything is mutated on the main thread, once per frame.

/// First-person and orbit cameras sharing one view-basis derivation.
pub mod camera;
/// Per-frame render engine: device, pipeline, uniforms, draw sequencing.
pub mod engine;
/// Crate-level error types.
pub mod error;
/// wgpu device/surface initialization and pipeline construction.
pub mod gpu;
/// Input state tracking and camera control mapping.
#[cfg(feature = "viewer")]
pub mod input;
/// Light parameter block and its GPU uniform.
pub mod lighting;
/// OBJ mesh ingestion and GPU vertex buffers.
pub mod mesh;
/// Runtime configuration with TOML presets.
pub mod options;
/// Scene model table and placements.
pub mod scene;
/// Shared utilities (frame timing).
pub mod util;
/// Standalone winit-backed window.
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::SylvaError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
