//! Emission pipeline.
//!
//! One emission: ensure the output root exists, discover templates,
//! register them as file dependencies with the host compilation, then run
//! every template's read → convert → write chain as an independent task.
//! All chains are joined before the report is returned, so completion
//! never races ahead of the writes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use courier_core::{discover_templates, EmitConfig};
use courier_engine::Engine;

use crate::error::{io_err, EmitError};
use crate::hook::Compilation;
use crate::outpath::derive_output_path;
use crate::sink::WarningSink;
use crate::writer::{write_output, WriteResult};

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Summary of one settled emission.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EmitReport {
    /// Number of templates discovered.
    pub templates: usize,
    /// Output paths written, sorted.
    pub written: Vec<PathBuf>,
    /// Output paths a dry run would have written, sorted.
    pub would_write: Vec<PathBuf>,
    /// Number of templates whose conversion produced warnings.
    pub warned_templates: usize,
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Runs emissions for one configuration, engine, and warning sink.
pub struct Emitter {
    config: EmitConfig,
    engine: Arc<dyn Engine>,
    sink: Arc<dyn WarningSink>,
    dry_run: bool,
}

impl Emitter {
    pub fn new(config: EmitConfig, engine: Arc<dyn Engine>, sink: Arc<dyn WarningSink>) -> Self {
        Emitter {
            config,
            engine,
            sink,
            dry_run: false,
        }
    }

    /// Report what would be written without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Run one emission and wait for every per-file chain to settle.
    ///
    /// Discovered templates are registered with `compilation` before any
    /// conversion starts. An empty discovery returns an empty report
    /// without creating anything beyond the output root.
    pub async fn emit(&self, compilation: &mut dyn Compilation) -> Result<EmitReport, EmitError> {
        let output_root = Path::new(self.config.output_root());
        if !self.dry_run {
            std::fs::create_dir_all(output_root).map_err(|e| io_err(output_root, e))?;
        }

        let templates = discover_templates(&self.config)?;
        if templates.is_empty() {
            tracing::debug!("no templates under {}", self.config.input_root());
            return Ok(EmitReport::default());
        }

        for template in &templates {
            compilation.add_file_dependency(template);
        }

        let mut tasks = JoinSet::new();
        for template in templates.iter().cloned() {
            let config = self.config.clone();
            let engine = Arc::clone(&self.engine);
            let sink = Arc::clone(&self.sink);
            let dry_run = self.dry_run;
            tasks.spawn(async move { handle_template(template, config, engine, sink, dry_run).await });
        }

        let mut report = EmitReport {
            templates: templates.len(),
            ..EmitReport::default()
        };
        while let Some(joined) = tasks.join_next().await {
            let outcome = joined.map_err(|e| EmitError::Task(e.to_string()))??;
            if outcome.warned {
                report.warned_templates += 1;
            }
            match outcome.write {
                WriteResult::Written { path } => report.written.push(path),
                WriteResult::WouldWrite { path } => report.would_write.push(path),
            }
        }
        report.written.sort();
        report.would_write.sort();
        Ok(report)
    }
}

/// Run one emission on a dedicated runtime, blocking until settlement.
pub fn emit_blocking(
    emitter: &Emitter,
    compilation: &mut dyn Compilation,
) -> Result<EmitReport, EmitError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    runtime.block_on(emitter.emit(compilation))
}

// ---------------------------------------------------------------------------
// Per-file chain
// ---------------------------------------------------------------------------

struct TemplateOutcome {
    write: WriteResult,
    warned: bool,
}

async fn handle_template(
    template: PathBuf,
    config: EmitConfig,
    engine: Arc<dyn Engine>,
    sink: Arc<dyn WarningSink>,
    dry_run: bool,
) -> Result<TemplateOutcome, EmitError> {
    let source = tokio::fs::read_to_string(&template)
        .await
        .map_err(|e| io_err(&template, e))?;

    let conversion = engine
        .convert(&source, config.engine_options())
        .map_err(|e| EmitError::Engine {
            path: template.clone(),
            source: e,
        })?;

    let warned = !conversion.warnings.is_empty();
    if warned {
        sink.report(&template, &conversion.warnings);
    }

    let output = derive_output_path(&template, &config)?;
    let write = write_output(&output, &conversion.html, dry_run)?;
    Ok(TemplateOutcome { write, warned })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
