//! Configuration schema types for `svgless.toml`
//!
//! Defines the structure and validation rules for svgless project configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do when two icons derive the same identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Later icon replaces the earlier one in place, with a warning
    #[default]
    LastWins,
    /// Fail the run
    Reject,
}

/// Project layout section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Source directory containing icons
    #[serde(default = "default_src")]
    pub src: PathBuf,
    /// Directory the stylesheet is written to
    #[serde(default = "default_out")]
    pub out: PathBuf,
    /// Glob patterns, relative to `src`
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { src: default_src(), out: default_out(), sources: default_sources() }
    }
}

fn default_src() -> PathBuf {
    PathBuf::from("icons")
}

fn default_out() -> PathBuf {
    PathBuf::from("build")
}

fn default_sources() -> Vec<String> {
    vec!["**/*.svg".to_string()]
}

/// Options controlling the generated stylesheet.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputOptions {
    /// Stylesheet base name, without extension
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Emit width/height declarations
    #[serde(default)]
    pub add_size: bool,
    /// Emit mixins instead of concrete rules
    #[serde(default)]
    pub output_mixin: bool,
    /// Prefix for selector and mixin names
    #[serde(default = "default_mixin_prefix")]
    pub mixin_prefix: String,
    /// Width used when neither the file name nor the markup declares one
    #[serde(default = "default_size")]
    pub default_width: String,
    /// Height used when neither the file name nor the markup declares one
    #[serde(default = "default_size")]
    pub default_height: String,
    /// Identifier collision handling
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            add_size: false,
            output_mixin: false,
            mixin_prefix: default_mixin_prefix(),
            default_width: default_size(),
            default_height: default_size(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

fn default_file_name() -> String {
    "icons".to_string()
}

fn default_mixin_prefix() -> String {
    "icon-".to_string()
}

fn default_size() -> String {
    "16px".to_string()
}

/// Selector prefixes are limited to CSS identifier characters. Empty is allowed.
fn is_valid_prefix(prefix: &str) -> bool {
    let leading_digit = prefix.chars().next().is_some_and(|c| c.is_ascii_digit());
    !leading_digit && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extension of the generated stylesheet
pub const ARTIFACT_EXTENSION: &str = "less";

impl OutputOptions {
    /// Name of the emitted artifact, `{file_name}.less`.
    pub fn artifact_name(&self) -> String {
        format!("{}.{}", self.file_name, ARTIFACT_EXTENSION)
    }

    /// Validate the options, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.file_name.trim().is_empty() {
            errors.push(ConfigValidationError::new("output.file_name", "must not be empty"));
        } else if self.file_name.contains(['/', '\\']) {
            errors.push(ConfigValidationError::new(
                "output.file_name",
                "must be a base name without directories",
            ));
        }

        if !is_valid_prefix(&self.mixin_prefix) {
            errors.push(ConfigValidationError::new(
                "output.mixin_prefix",
                format!(
                    "'{}' must use only letters, digits, '-' and '_', and not start with a digit",
                    self.mixin_prefix
                ),
            ));
        }

        for (field, value) in
            [("output.default_width", &self.default_width), ("output.default_height", &self.default_height)]
        {
            if value.trim().is_empty() {
                errors.push(ConfigValidationError::new(field, "must not be empty"));
            } else if !crate::size::is_length(value) {
                errors.push(ConfigValidationError::new(
                    field,
                    format!("'{}' is not a CSS length", value),
                ));
            } else if !crate::size::has_unit(value) {
                errors.push(ConfigValidationError::new(
                    field,
                    format!("'{}' must carry a unit (e.g. '{}px')", value, value),
                ));
            }
        }

        errors
    }
}

/// Top-level `svgless.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SvglessConfig {
    /// Project layout
    #[serde(default)]
    pub project: ProjectConfig,
    /// Stylesheet options
    #[serde(default)]
    pub output: OutputOptions,
}

impl SvglessConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.sources.is_empty() {
            errors.push(ConfigValidationError::new("project.sources", "must list at least one pattern"));
        }
        for pattern in &self.project.sources {
            if let Err(e) = glob::Pattern::new(pattern) {
                errors.push(ConfigValidationError::new(
                    "project.sources",
                    format!("invalid glob '{}': {}", pattern, e),
                ));
            }
        }

        errors.extend(self.output.validate());
        errors
    }
}

/// A single configuration validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path of the offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl ConfigValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OutputOptions::default();
        assert_eq!(options.file_name, "icons");
        assert!(!options.add_size);
        assert!(!options.output_mixin);
        assert_eq!(options.mixin_prefix, "icon-");
        assert_eq!(options.default_width, "16px");
        assert_eq!(options.default_height, "16px");
        assert_eq!(options.duplicates, DuplicatePolicy::LastWins);
        assert_eq!(options.artifact_name(), "icons.less");
        assert!(options.validate().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: SvglessConfig = toml::from_str(
            r#"
[project]
src = "assets/svg"
out = "dist/styles"
sources = ["ui/*.svg", "brand/**/*.svg"]

[output]
file_name = "common"
add_size = true
output_mixin = true
mixin_prefix = "ico-"
default_width = "2em"
default_height = "32px"
duplicates = "reject"
"#,
        )
        .unwrap();

        assert_eq!(config.project.src, PathBuf::from("assets/svg"));
        assert_eq!(config.project.sources.len(), 2);
        assert_eq!(config.output.file_name, "common");
        assert!(config.output.add_size);
        assert!(config.output.output_mixin);
        assert_eq!(config.output.mixin_prefix, "ico-");
        assert_eq!(config.output.default_width, "2em");
        assert_eq!(config.output.duplicates, DuplicatePolicy::Reject);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SvglessConfig = toml::from_str("").unwrap();
        assert_eq!(config.project.src, PathBuf::from("icons"));
        assert_eq!(config.project.out, PathBuf::from("build"));
        assert_eq!(config.project.sources, vec!["**/*.svg".to_string()]);
        assert_eq!(config.output, OutputOptions::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<SvglessConfig, _> = toml::from_str("[output]\nfilename = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_errors() {
        let options = OutputOptions {
            file_name: "out/icons".to_string(),
            mixin_prefix: "icon {".to_string(),
            default_width: "16".to_string(),
            default_height: String::new(),
            ..OutputOptions::default()
        };
        let errors = options.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["output.file_name", "output.mixin_prefix", "output.default_width", "output.default_height"]
        );
        assert_eq!(errors[2].to_string(), "output.default_width: '16' must carry a unit (e.g. '16px')");
    }

    #[test]
    fn test_prefix_must_be_identifier_chars() {
        for ok in ["", "icon-", "X-", "_ui", "svg_2-"] {
            let options = OutputOptions { mixin_prefix: ok.to_string(), ..OutputOptions::default() };
            assert!(options.validate().is_empty(), "{:?}", ok);
        }
        for bad in ["a.b-", "x;", "\"q", "#id", "@{v}", "a:b", "1icon-", "ünï-"] {
            let options = OutputOptions { mixin_prefix: bad.to_string(), ..OutputOptions::default() };
            let errors = options.validate();
            assert_eq!(errors.len(), 1, "{:?}", bad);
            assert_eq!(errors[0].field, "output.mixin_prefix");
        }
    }

    #[test]
    fn test_default_size_must_be_a_length() {
        let options = OutputOptions {
            default_width: "1px;}#x{color:red".to_string(),
            default_height: "auto".to_string(),
            ..OutputOptions::default()
        };
        let errors = options.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "output.default_width: '1px;}#x{color:red' is not a CSS length");
        assert_eq!(errors[1].field, "output.default_height");
    }

    #[test]
    fn test_invalid_glob_reported() {
        let mut config = SvglessConfig::default();
        config.project.sources = vec!["[".to_string()];
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "project.sources");
    }
}
