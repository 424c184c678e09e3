//! Subcommand implementations and shared config resolution.

pub mod build;
pub mod check;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use courier_core::{ConfigFile, EmitConfig, EmitOptions, CONFIG_FILE_NAME};

/// Flags shared by every command; values override `courier.yaml`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Directory containing .mjml templates.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory HTML outputs are written to.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output file extension (default ".html").
    #[arg(long)]
    pub extension: Option<String>,

    /// Config file path (default: ./courier.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Merge flags over the config file and validate.
    pub fn resolve(&self) -> Result<EmitConfig> {
        let file = self.load_file()?;

        let input = self
            .input
            .clone()
            .or_else(|| file.as_ref().map(|f| f.input.clone()))
            .context("no input root; pass --input or add `input:` to courier.yaml")?;
        let output = self
            .output
            .clone()
            .or_else(|| file.as_ref().map(|f| f.output.clone()))
            .context("no output root; pass --output or add `output:` to courier.yaml")?;
        let extension = self
            .extension
            .clone()
            .or_else(|| file.as_ref().and_then(|f| f.extension.clone()));
        let engine = file.map(|f| f.engine).unwrap_or_default();

        EmitConfig::new(
            input,
            EmitOptions {
                extension,
                output_root: output,
                engine,
            },
        )
        .context("invalid configuration")
    }

    fn load_file(&self) -> Result<Option<ConfigFile>> {
        match &self.config {
            Some(path) => ConfigFile::load(path)
                .map(Some)
                .with_context(|| format!("failed to load {}", path.display())),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if default.exists() {
                    ConfigFile::load(&default)
                        .map(Some)
                        .with_context(|| format!("failed to load {}", default.display()))
                } else {
                    Ok(None)
                }
            }
        }
    }
}
