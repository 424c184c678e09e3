//! Error types for courier-engine.

use thiserror::Error;

/// All errors that can arise from a single conversion.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not parse the template source.
    #[error("failed to parse template: {0}")]
    Parse(#[from] mrml::prelude::parser::Error),

    /// The engine parsed the template but could not render it.
    #[error("failed to render template: {0}")]
    Render(#[from] mrml::prelude::render::Error),
}
