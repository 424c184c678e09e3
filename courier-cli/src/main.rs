//! Courier — MJML template emission CLI.
//!
//! # Usage
//!
//! ```text
//! courier build [--input <dir>] [--output <dir>] [--extension <ext>] [--dry-run] [--json]
//! courier check [--input <dir>]
//! courier watch [--input <dir>] [--output <dir>]
//! ```
//!
//! Flags override values from a `courier.yaml` in the working directory
//! (or the file passed with `--config`).

mod commands;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, check::CheckArgs, watch::WatchArgs};

#[derive(Parser, Debug)]
#[command(
    name = "courier",
    version,
    about = "Compile MJML email templates into HTML build assets",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert all templates under the input root and write HTML outputs.
    Build(BuildArgs),

    /// Convert templates and report warnings without writing anything.
    Check(CheckArgs),

    /// Rebuild outputs whenever templates under the input root change.
    Watch(WatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => args.run(),
        Commands::Check(args) => args.run(),
        Commands::Watch(args) => args.run(),
    }
}
