//! Warning reporting seam.
//!
//! Engine warnings go through an injected sink rather than straight to the
//! process console, so hosts choose the surface and tests can assert on
//! emitted diagnostics.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use courier_engine::Warning;

/// Receives the warnings of one template conversion.
///
/// Implementations are called from concurrent per-file tasks and must be
/// `Send + Sync`. Warnings are informational; a sink never aborts an
/// emission.
pub trait WarningSink: Send + Sync {
    /// Called once per template whose conversion produced warnings.
    /// `warnings` is non-empty and in engine order.
    fn report(&self, template: &Path, warnings: &[Warning]);
}

/// Sink that discards all warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn report(&self, _template: &Path, _warnings: &[Warning]) {}
}

/// Sink that records reports in memory, for asserting on diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far, in arrival order.
    pub fn reports(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.reports.lock().unwrap().clone()
    }
}

impl WarningSink for MemorySink {
    fn report(&self, template: &Path, warnings: &[Warning]) {
        self.reports.lock().unwrap().push((
            template.to_path_buf(),
            warnings.iter().map(|w| w.message.clone()).collect(),
        ));
    }
}
