//! `courier watch` — rebuild outputs when templates change.
//!
//! Watches the input root recursively and re-runs the emission when a
//! template file changes, with a per-path debounce window so editor save
//! bursts trigger a single rebuild.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};

use courier_emit::{emit_blocking, Emitter, FileDependencies};
use courier_engine::MrmlEngine;

use crate::commands::ConfigArgs;
use crate::console::ConsoleSink;

const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Arguments for `courier watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl WatchArgs {
    pub fn run(self) -> Result<()> {
        init_tracing();

        let config = self.config.resolve()?;
        let template_extension = config.template_extension().to_string();
        let input_root = PathBuf::from(config.input_root());
        let emitter = Emitter::new(
            config,
            Arc::new(MrmlEngine::new()),
            Arc::new(ConsoleSink::new()),
        );

        rebuild(&emitter);

        let (event_tx, event_rx) = mpsc::channel::<notify::Result<Event>>();
        let mut watcher = recommended_watcher(move |event| {
            let _ = event_tx.send(event);
        })
        .context("failed to create filesystem watcher")?;
        watcher
            .watch(&input_root, RecursiveMode::Recursive)
            .with_context(|| format!("failed to watch {}", input_root.display()))?;
        tracing::info!("watching {}", input_root.display());

        let mut debounce = HashMap::<PathBuf, Instant>::new();
        for event in event_rx {
            let event = match event {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(error = %err, "watcher event error");
                    continue;
                }
            };
            if !is_relevant_event_kind(&event.kind) {
                continue;
            }

            let now = Instant::now();
            let mut triggered = false;
            for path in event.paths {
                if !is_template(&path, &template_extension) {
                    continue;
                }
                if should_process_event(&mut debounce, &path, now) {
                    triggered = true;
                }
            }
            if triggered {
                rebuild(&emitter);
            }
        }
        Ok(())
    }
}

fn rebuild(emitter: &Emitter) {
    let mut deps = FileDependencies::new();
    match emit_blocking(emitter, &mut deps) {
        Ok(report) => tracing::info!(
            templates = report.templates,
            written = report.written.len(),
            "emission completed"
        ),
        Err(err) => tracing::error!(error = %err, "emission failed"),
    }
}

fn is_relevant_event_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn is_template(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn should_process_event(
    debounce: &mut HashMap<PathBuf, Instant>,
    path: &Path,
    now: Instant,
) -> bool {
    match debounce.get(path) {
        Some(last) if now.duration_since(*last) < DEBOUNCE_WINDOW => false,
        _ => {
            debounce.insert(path.to_path_buf(), now);
            true
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
