//! `courier check` — convert templates without writing, report problems.

use anyhow::{bail, Context, Result};
use clap::Args;

use courier_core::discover_templates;
use courier_emit::WarningSink;
use courier_engine::{Engine, MrmlEngine};

use crate::commands::ConfigArgs;
use crate::console::ConsoleSink;

/// Arguments for `courier check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.resolve()?;
        let templates = discover_templates(&config).context("template discovery failed")?;
        if templates.is_empty() {
            println!("✓ no templates found under {}", config.input_root());
            return Ok(());
        }

        let engine = MrmlEngine::new();
        let sink = ConsoleSink::new();
        let mut warned = 0usize;
        let mut failed = 0usize;

        for template in &templates {
            let source = std::fs::read_to_string(template)
                .with_context(|| format!("failed to read {}", template.display()))?;
            match engine.convert(&source, config.engine_options()) {
                Ok(conversion) => {
                    if !conversion.warnings.is_empty() {
                        warned += 1;
                        sink.report(template, &conversion.warnings);
                    }
                }
                Err(err) => {
                    failed += 1;
                    eprintln!("✗ {}: {err}", template.display());
                }
            }
        }

        println!(
            "checked {} template(s): {warned} with warnings, {failed} failed",
            templates.len()
        );
        if failed > 0 {
            bail!("{failed} template(s) failed to convert");
        }
        Ok(())
    }
}
