//! Configuration loading and discovery for `svgless.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{DuplicatePolicy, SvglessConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "svgless.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse svgless.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override source directory
    pub src: Option<PathBuf>,
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override stylesheet base name
    pub file_name: Option<String>,
    /// Force size declarations on
    pub add_size: Option<bool>,
    /// Force mixin output on
    pub output_mixin: Option<bool>,
    /// Override selector/mixin prefix
    pub mixin_prefix: Option<String>,
    /// Override default width
    pub default_width: Option<String>,
    /// Override default height
    pub default_height: Option<String>,
    /// Override collision policy
    pub duplicates: Option<DuplicatePolicy>,
}

/// Find svgless.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for svgless.toml
/// 2. Check XDG_CONFIG_HOME/svgless/svgless.toml (or ~/.config/svgless/svgless.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find svgless.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("svgless").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find svgless.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a svgless.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<SvglessConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(SvglessConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<SvglessConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<SvglessConfig, ConfigError> {
    let config: SvglessConfig = toml::from_str(contents)?;
    validated(config)
}

/// Validate a configuration, turning problems into a `ConfigError`.
pub fn validated(config: SvglessConfig) -> Result<SvglessConfig, ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}

/// Apply CLI overrides on top of a loaded configuration.
pub fn merge_cli_overrides(config: &mut SvglessConfig, overrides: &CliOverrides) {
    if let Some(src) = &overrides.src {
        config.project.src = src.clone();
    }
    if let Some(out) = &overrides.out {
        config.project.out = out.clone();
    }

    let output = &mut config.output;
    if let Some(file_name) = &overrides.file_name {
        output.file_name = file_name.clone();
    }
    if let Some(add_size) = overrides.add_size {
        output.add_size = add_size;
    }
    if let Some(output_mixin) = overrides.output_mixin {
        output.output_mixin = output_mixin;
    }
    if let Some(prefix) = &overrides.mixin_prefix {
        output.mixin_prefix = prefix.clone();
    }
    if let Some(width) = &overrides.default_width {
        output.default_width = width.clone();
    }
    if let Some(height) = &overrides.default_height {
        output.default_height = height.clone();
    }
    if let Some(duplicates) = overrides.duplicates {
        output.duplicates = duplicates;
    }
}
