//! # courier-emit
//!
//! Emission pipeline: discover MJML templates, convert each through the
//! engine, and write HTML outputs. Every per-file chain is settled before
//! an emission reports completion.
//!
//! Call [`Emitter::emit`] directly from async code, [`emit_blocking`] from
//! sync code, or register a [`TemplatePlugin`] against a host
//! [`BuildPipeline`].

pub mod emitter;
pub mod error;
pub mod hook;
pub mod outpath;
pub mod sink;
pub mod writer;

pub use emitter::{emit_blocking, EmitReport, Emitter};
pub use error::EmitError;
pub use hook::{BuildPipeline, Compilation, EmitHook, FileDependencies, TemplatePlugin};
pub use sink::{MemorySink, NullSink, WarningSink};
pub use writer::WriteResult;
