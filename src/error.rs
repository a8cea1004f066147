//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::mesh::ObjError;

/// Errors produced by the sylva crate.
#[derive(Debug)]
pub enum SylvaError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to load a model file.
    Model(ObjError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene table parsing failure.
    SceneParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for SylvaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Model(e) => write!(f, "model load error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneParse(msg) => write!(f, "scene parse error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for SylvaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Model(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for SylvaError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<ObjError> for SylvaError {
    fn from(e: ObjError) -> Self {
        Self::Model(e)
    }
}

impl From<std::io::Error> for SylvaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
