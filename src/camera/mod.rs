//! Camera subsystem: a closed set of two control schemes sharing one
//! view-basis derivation.
//!
//! [`FirstPersonCamera`] accumulates relative yaw/pitch deltas and moves
//! freely; [`OrbitCamera`] holds absolute angles on a sphere around a fixed
//! target. Both derive an orthonormal `{look, right, up}` basis from the
//! same spherical formula ([`basis`]) and build their view matrix with the
//! standard look-at construction. [`CameraRig`] wraps the pair so the
//! render loop can dispatch without knowing which scheme is active.

/// Shared yaw/pitch basis math and clamp constants.
pub mod basis;
/// Free-flying camera driven by relative input deltas.
pub mod first_person;
/// Sphere-bound camera around a fixed pivot.
pub mod orbit;
/// Tagged union over the two camera variants.
pub mod rig;
/// GPU uniform block derived from a rig each frame.
pub mod uniform;

pub use basis::Basis;
pub use first_person::FirstPersonCamera;
pub use orbit::OrbitCamera;
pub use rig::CameraRig;
pub use uniform::CameraUniform;
