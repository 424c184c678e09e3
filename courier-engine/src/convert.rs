//! Conversion seam — [`Engine`] trait and the [`MrmlEngine`] implementation.

use courier_core::EngineOptions;
use mrml::prelude::render::RenderOptions;

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A single warning reported by the engine for one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

/// Result of converting one template: the rendered HTML plus warnings in
/// the order the engine reported them.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub html: String,
    pub warnings: Vec<Warning>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The conversion contract: source text plus options in, [`Conversion`] out.
///
/// Conversion is synchronous and performs no I/O. Warnings never abort a
/// conversion; a returned error does.
pub trait Engine: Send + Sync {
    fn convert(&self, source: &str, options: &EngineOptions) -> Result<Conversion, EngineError>;
}

/// Engine backed by the `mrml` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct MrmlEngine;

impl MrmlEngine {
    pub fn new() -> Self {
        MrmlEngine
    }
}

fn render_options(options: &EngineOptions) -> RenderOptions {
    RenderOptions {
        disable_comments: options.disable_comments,
        social_icon_origin: options.social_icon_origin.clone().map(Into::into),
        ..Default::default()
    }
}

impl Engine for MrmlEngine {
    fn convert(&self, source: &str, options: &EngineOptions) -> Result<Conversion, EngineError> {
        let parsed = mrml::parse(source)?;
        let warnings = parsed
            .warnings
            .iter()
            .map(|warning| Warning {
                message: format!("{warning:?}"),
            })
            .collect();
        let html = parsed.element.render(&render_options(options))?;
        Ok(Conversion { html, warnings })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "<mjml><mj-body><mj-section><mj-column>\
        <mj-text>Hello courier</mj-text>\
        </mj-column></mj-section></mj-body></mjml>";

    #[test]
    fn basic_template_renders() {
        let engine = MrmlEngine::new();
        let conversion = engine.convert(BASIC, &EngineOptions::default()).unwrap();
        assert!(conversion.html.contains("Hello courier"));
        assert!(conversion.html.contains("<body"));
        assert!(conversion.warnings.is_empty());
    }

    #[test]
    fn empty_body_renders() {
        let engine = MrmlEngine::new();
        let conversion = engine
            .convert("<mjml><mj-body></mj-body></mjml>", &EngineOptions::default())
            .unwrap();
        assert!(!conversion.html.is_empty());
    }

    #[test]
    fn truncated_template_is_a_parse_error() {
        let engine = MrmlEngine::new();
        let err = engine
            .convert("<mjml><mj-body>", &EngineOptions::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }

    #[test]
    fn options_are_forwarded() {
        let engine = MrmlEngine::new();
        let options = EngineOptions {
            disable_comments: true,
            social_icon_origin: Some("https://assets.example.com/".to_string()),
        };
        let conversion = engine.convert(BASIC, &options).unwrap();
        assert!(conversion.html.contains("Hello courier"));
    }
}
