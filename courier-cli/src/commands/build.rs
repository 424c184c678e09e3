//! `courier build` — convert templates and write HTML outputs.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use courier_emit::{emit_blocking, EmitReport, Emitter, FileDependencies};
use courier_engine::MrmlEngine;

use crate::commands::ConfigArgs;
use crate::console::ConsoleSink;

/// Arguments for `courier build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show what would be written without writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the emission report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.resolve()?;
        let emitter = Emitter::new(
            config,
            Arc::new(MrmlEngine::new()),
            Arc::new(ConsoleSink::new()),
        )
        .dry_run(self.dry_run);

        let mut deps = FileDependencies::new();
        let report = emit_blocking(&emitter, &mut deps).context("build failed")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        print_report(&report, self.dry_run);
        Ok(())
    }
}

fn print_report(report: &EmitReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if report.templates == 0 {
        println!("{prefix}✓ no templates found — nothing to do");
        return;
    }

    println!(
        "{prefix}✓ {} template(s) converted ({} with warnings)",
        report.templates, report.warned_templates
    );
    for path in &report.written {
        println!("  ✎  {}", path.display());
    }
    for path in &report.would_write {
        println!("  ~  {}", path.display());
    }
}
