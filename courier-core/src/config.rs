//! Emission configuration.
//!
//! Roots are stored as forward-slash strings without trailing separators
//! because output-path derivation is a textual substitution over them.
//! [`EmitConfig`] is validated and defaulted once at construction and
//! immutable afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default output file extension.
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".html";

/// Extension of template source files (no dot).
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "mjml";

/// Name of the project-local config file.
pub const CONFIG_FILE_NAME: &str = "courier.yaml";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options accepted by [`EmitConfig::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Output file extension; defaults to `.html`. A missing leading dot is added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Directory converted templates are written to.
    pub output_root: PathBuf,
    /// Options forwarded to the conversion engine untouched.
    #[serde(default)]
    pub engine: EngineOptions,
}

/// Render options forwarded to the conversion engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Strip non-conditional comments from the generated HTML.
    #[serde(default)]
    pub disable_comments: bool,
    /// Base URL used by the engine for social icon assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_icon_origin: Option<String>,
}

// ---------------------------------------------------------------------------
// EmitConfig
// ---------------------------------------------------------------------------

/// Immutable emission configuration.
///
/// Invariants held after construction:
/// - `input_root` and `output_root` use forward-slash separators and carry
///   no trailing separator.
/// - `output_extension` starts with `.`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitConfig {
    input_root: String,
    output_root: String,
    output_extension: String,
    template_extension: String,
    engine: EngineOptions,
}

impl EmitConfig {
    /// Validate `input_root` and `options` and build the configuration.
    pub fn new(input_root: impl AsRef<Path>, options: EmitOptions) -> Result<Self, ConfigError> {
        let input_root = normalize_root(input_root.as_ref(), "input")?;
        let output_root = normalize_root(&options.output_root, "output")?;
        let output_extension = normalize_extension(
            options
                .extension
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_EXTENSION),
        );

        Ok(EmitConfig {
            input_root,
            output_root,
            output_extension,
            template_extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
            engine: options.engine,
        })
    }

    /// Directory scanned for templates, forward-slash normalized.
    pub fn input_root(&self) -> &str {
        &self.input_root
    }

    /// Directory outputs are written to, forward-slash normalized.
    pub fn output_root(&self) -> &str {
        &self.output_root
    }

    /// Output extension, always dot-prefixed.
    pub fn output_extension(&self) -> &str {
        &self.output_extension
    }

    /// Template source extension, no dot.
    pub fn template_extension(&self) -> &str {
        &self.template_extension
    }

    /// Options passed through to the conversion engine.
    pub fn engine_options(&self) -> &EngineOptions {
        &self.engine
    }
}

fn normalize_root(path: &Path, role: &'static str) -> Result<String, ConfigError> {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let trimmed = normalized.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyRoot { role });
    }
    Ok(trimmed.to_string())
}

fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

// ---------------------------------------------------------------------------
// ConfigFile
// ---------------------------------------------------------------------------

/// On-disk shape of `courier.yaml`.
///
/// ```yaml
/// input: templates
/// output: dist
/// extension: .html
/// engine:
///   disable_comments: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Directory containing template sources.
    pub input: PathBuf,
    /// Directory outputs are written to.
    pub output: PathBuf,
    /// Output extension override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Engine pass-through options.
    #[serde(default)]
    pub engine: EngineOptions,
}

impl ConfigFile {
    /// Load a config file from `path`.
    ///
    /// Returns `ConfigError::NotFound` if absent, `ConfigError::Parse`
    /// (with path and line context) if malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Convert the file into a validated [`EmitConfig`].
    pub fn into_config(self) -> Result<EmitConfig, ConfigError> {
        EmitConfig::new(
            &self.input,
            EmitOptions {
                extension: self.extension,
                output_root: self.output,
                engine: self.engine,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn options(output: &str) -> EmitOptions {
        EmitOptions {
            extension: None,
            output_root: PathBuf::from(output),
            engine: EngineOptions::default(),
        }
    }

    #[test]
    fn defaults_applied() {
        let config = EmitConfig::new("templates", options("dist")).unwrap();
        assert_eq!(config.input_root(), "templates");
        assert_eq!(config.output_root(), "dist");
        assert_eq!(config.output_extension(), ".html");
        assert_eq!(config.template_extension(), "mjml");
    }

    #[rstest]
    #[case(Some(".html"), ".html")]
    #[case(Some("html"), ".html")]
    #[case(Some(".htm"), ".htm")]
    #[case(Some("xhtml"), ".xhtml")]
    #[case(None, ".html")]
    fn extension_is_dot_prefixed(#[case] given: Option<&str>, #[case] expected: &str) {
        let config = EmitConfig::new(
            "templates",
            EmitOptions {
                extension: given.map(str::to_string),
                ..options("dist")
            },
        )
        .unwrap();
        assert_eq!(config.output_extension(), expected);
    }

    #[rstest]
    #[case("templates\\mail", "templates/mail")]
    #[case("templates/", "templates")]
    #[case("templates//", "templates")]
    #[case("./templates", "./templates")]
    fn roots_are_normalized(#[case] given: &str, #[case] expected: &str) {
        let config = EmitConfig::new(given, options("dist")).unwrap();
        assert_eq!(config.input_root(), expected);
    }

    #[test]
    fn empty_input_root_rejected() {
        let err = EmitConfig::new("", options("dist")).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRoot { role: "input" }));
    }

    #[test]
    fn empty_output_root_rejected() {
        let err = EmitConfig::new("templates", options("")).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRoot { role: "output" }));
    }

    #[test]
    fn config_file_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "input: templates\noutput: dist\nextension: .htm\nengine:\n  disable_comments: true\n",
        )
        .unwrap();

        let file = ConfigFile::load(&path).unwrap();
        assert_eq!(file.input, PathBuf::from("templates"));
        assert!(file.engine.disable_comments);

        let config = file.into_config().unwrap();
        assert_eq!(config.output_extension(), ".htm");
        assert!(config.engine_options().disable_comments);
    }

    #[test]
    fn config_file_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.yaml");
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn config_file_parse_error_includes_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "input: [unclosed\n").unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        match err {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn engine_options_default_from_partial_yaml() {
        let file: ConfigFile = serde_yaml::from_str("input: templates\noutput: dist\n").unwrap();
        assert_eq!(file.engine, EngineOptions::default());
        assert!(file.extension.is_none());
    }
}
