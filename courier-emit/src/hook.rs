//! Build-pipeline integration seam.
//!
//! The host build system is an external collaborator: it implements
//! [`BuildPipeline`] and [`Compilation`] and invokes registered hooks at
//! its emission phase. [`TemplatePlugin`] is the registration facade.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use courier_core::{EmitConfig, EmitOptions};
use courier_engine::{Engine, MrmlEngine};

use crate::emitter::{emit_blocking, EmitReport, Emitter};
use crate::error::EmitError;
use crate::sink::{NullSink, WarningSink};

// ---------------------------------------------------------------------------
// Host contracts
// ---------------------------------------------------------------------------

/// Mutable per-build compilation state supplied by the host.
pub trait Compilation {
    /// Record `path` so the host re-runs the build when it changes.
    fn add_file_dependency(&mut self, path: &Path);
}

/// The host build pipeline's registration surface.
pub trait BuildPipeline {
    /// Attach a hook to the emission phase.
    fn register_emit_hook(&mut self, hook: Box<dyn EmitHook>);
}

/// A hook invoked once per build at the emission phase.
///
/// `emit` must not return before every output write has settled.
pub trait EmitHook: Send + Sync {
    fn emit(&self, compilation: &mut dyn Compilation) -> Result<EmitReport, EmitError>;
}

/// List-backed [`Compilation`] for hosts without their own dependency set.
#[derive(Debug, Default)]
pub struct FileDependencies {
    paths: Vec<PathBuf>,
}

impl FileDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered dependency paths, in registration order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Compilation for FileDependencies {
    fn add_file_dependency(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }
}

// ---------------------------------------------------------------------------
// TemplatePlugin
// ---------------------------------------------------------------------------

/// Registration facade: converts the templates under `input_root` into
/// HTML files under the configured output root on every emission.
pub struct TemplatePlugin {
    emitter: Emitter,
}

impl std::fmt::Debug for TemplatePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplatePlugin").finish_non_exhaustive()
    }
}

impl TemplatePlugin {
    /// Validate configuration once and build the plugin with the default
    /// engine and a silent warning sink.
    pub fn new(input_root: impl AsRef<Path>, options: EmitOptions) -> Result<Self, EmitError> {
        let config = EmitConfig::new(input_root, options)?;
        Ok(TemplatePlugin {
            emitter: Emitter::new(config, Arc::new(MrmlEngine::new()), Arc::new(NullSink)),
        })
    }

    /// Build the plugin from an explicit engine and sink.
    pub fn with_parts(
        config: EmitConfig,
        engine: Arc<dyn Engine>,
        sink: Arc<dyn WarningSink>,
    ) -> Self {
        TemplatePlugin {
            emitter: Emitter::new(config, engine, sink),
        }
    }

    /// Register this plugin against the host pipeline's emission phase.
    pub fn apply(self, pipeline: &mut dyn BuildPipeline) {
        pipeline.register_emit_hook(Box::new(self));
    }
}

impl EmitHook for TemplatePlugin {
    fn emit(&self, compilation: &mut dyn Compilation) -> Result<EmitReport, EmitError> {
        emit_blocking(&self.emitter, compilation)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
