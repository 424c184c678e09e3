//! Error types for courier-emit.

use std::path::PathBuf;

use thiserror::Error;

use courier_core::ConfigError;
use courier_engine::EngineError;

/// All errors that can arise from an emission run.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Configuration or discovery failure.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The engine failed to convert a template.
    #[error("engine error in {path}: {source}")]
    Engine {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered template did not carry the input root prefix.
    #[error("discovered template {path} is outside input root {input_root}")]
    OutsideInputRoot { path: PathBuf, input_root: String },

    /// A per-file task panicked or was cancelled before settling.
    #[error("emission task failed: {0}")]
    Task(String),
}

/// Convenience constructor for [`EmitError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EmitError {
    EmitError::Io {
        path: path.into(),
        source,
    }
}
