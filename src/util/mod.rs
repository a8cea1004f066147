//! Shared utilities for the sandbox.

pub mod frame_timing;
