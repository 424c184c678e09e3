//! Colorized console sink for engine warnings.

use std::path::Path;

use colored::Colorize;

use courier_emit::WarningSink;
use courier_engine::Warning;

/// Prints one cyan header per template with warnings, then one line per
/// warning message.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink
    }
}

impl WarningSink for ConsoleSink {
    fn report(&self, template: &Path, warnings: &[Warning]) {
        println!(
            "{}",
            format!("MJML warnings in {}:", template.display()).cyan()
        );
        for warning in warnings {
            println!("  -  {}", warning.message);
        }
    }
}
