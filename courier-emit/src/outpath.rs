//! Derived output paths.
//!
//! Derivation is a textual substitution over forward-slash strings, not a
//! structural path computation: the `input_root` prefix is swapped for
//! `output_root`, and the template extension suffix for the configured
//! output extension.

use std::path::{Path, PathBuf};

use courier_core::EmitConfig;

use crate::error::EmitError;

/// Map a discovered template path to its output path.
///
/// `templates/sub/a.mjml` with output root `dist` and extension `.html`
/// derives `dist/sub/a.html`. A template that does not start with the
/// input root is an error rather than undefined behavior.
pub fn derive_output_path(template: &Path, config: &EmitConfig) -> Result<PathBuf, EmitError> {
    let normalized = template.to_string_lossy().replace('\\', "/");
    let rest = normalized
        .strip_prefix(config.input_root())
        .ok_or_else(|| EmitError::OutsideInputRoot {
            path: template.to_path_buf(),
            input_root: config.input_root().to_string(),
        })?;

    let swapped = format!("{}{}", config.output_root(), rest);
    let suffix = format!(".{}", config.template_extension());
    let stem = swapped.strip_suffix(&suffix).unwrap_or(swapped.as_str());
    Ok(PathBuf::from(format!(
        "{}{}",
        stem,
        config.output_extension()
    )))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use courier_core::{EmitOptions, EngineOptions};

    use super::*;

    fn config(input: &str, output: &str, extension: Option<&str>) -> EmitConfig {
        EmitConfig::new(
            input,
            EmitOptions {
                extension: extension.map(str::to_string),
                output_root: PathBuf::from(output),
                engine: EngineOptions::default(),
            },
        )
        .unwrap()
    }

    #[rstest]
    #[case("templates/a.mjml", "dist/a.html")]
    #[case("templates/sub/a.mjml", "dist/sub/a.html")]
    #[case("templates/sub/deep/mail.mjml", "dist/sub/deep/mail.html")]
    fn derives_html_outputs(#[case] template: &str, #[case] expected: &str) {
        let cfg = config("templates", "dist", None);
        let out = derive_output_path(Path::new(template), &cfg).unwrap();
        assert_eq!(out, PathBuf::from(expected));
    }

    #[test]
    fn custom_extension_is_applied() {
        let cfg = config("templates", "build/mail", Some(".htm"));
        let out = derive_output_path(Path::new("templates/a.mjml"), &cfg).unwrap();
        assert_eq!(out, PathBuf::from("build/mail/a.htm"));
    }

    #[test]
    fn extension_swap_only_touches_the_suffix() {
        let cfg = config("templates", "dist", None);
        let out = derive_output_path(Path::new("templates/a.mjml.backup.mjml"), &cfg).unwrap();
        assert_eq!(out, PathBuf::from("dist/a.mjml.backup.html"));
    }

    #[test]
    fn absolute_roots_derive_absolute_outputs() {
        let cfg = config("/srv/templates", "/srv/dist", None);
        let out = derive_output_path(Path::new("/srv/templates/sub/a.mjml"), &cfg).unwrap();
        assert_eq!(out, PathBuf::from("/srv/dist/sub/a.html"));
    }

    #[test]
    fn template_outside_input_root_is_an_error() {
        let cfg = config("templates", "dist", None);
        let err = derive_output_path(Path::new("other/a.mjml"), &cfg).unwrap_err();
        assert!(matches!(err, EmitError::OutsideInputRoot { .. }));
    }
}
