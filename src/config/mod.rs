//! Configuration module for svgless
//!
//! Provides types and parsing for `svgless.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::*;
