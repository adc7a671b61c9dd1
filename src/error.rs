//! Crate-wide error type.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors that can occur across the engine.
#[derive(Debug)]
pub enum PillarboxError {
    /// GPU context creation or surface handling failed.
    Gpu(RenderContextError),
    /// A configuration value was rejected (unknown palette key, bad preset field).
    Configuration(String),
    /// WGSL composition or validation failed.
    Shader(String),
    /// Filesystem I/O failed (preset load/save).
    Io(std::io::Error),
    /// Options (de)serialization failed.
    OptionsParse(String),
    /// Windowing / event-loop failure in the interactive viewer.
    Viewer(String),
}

impl fmt::Display for PillarboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::Shader(msg) => write!(f, "shader composition error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => write!(f, "options parse error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PillarboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for PillarboxError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for PillarboxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
