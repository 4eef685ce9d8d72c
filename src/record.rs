//! Per-icon record construction

use crate::config::OutputOptions;
use crate::error::TransformError;
use crate::escape::escape_markup;
use crate::markup::extract_declared_size;
use crate::minify::Minify;
use crate::name::parse_name;
use crate::size::{resolve_size, ResolvedSize};

/// An icon as it arrives from the file plumbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    /// File name, extension included
    pub name: String,
    /// Raw markup bytes
    pub contents: Vec<u8>,
}

impl IconFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), contents: contents.into() }
    }
}

/// Fully resolved icon, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Selector/mixin name without prefix
    pub identifier: String,
    /// Minified, percent-encoded markup
    pub escaped_markup: String,
    /// Present only when sizes are emitted
    pub size: Option<ResolvedSize>,
    /// File the record was built from
    pub source: String,
}

impl IconRecord {
    pub fn new(
        identifier: impl Into<String>,
        escaped_markup: impl Into<String>,
        size: Option<ResolvedSize>,
    ) -> Self {
        let identifier = identifier.into();
        Self { source: identifier.clone(), identifier, escaped_markup: escaped_markup.into(), size }
    }

    /// Record the file this icon came from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Run the whole per-icon chain: name, declared size, resolution, minify, escape.
pub fn build_record<M: Minify + ?Sized>(
    file: &IconFile,
    options: &OutputOptions,
    minifier: &M,
) -> Result<IconRecord, TransformError> {
    let markup = std::str::from_utf8(&file.contents)
        .map_err(|_| TransformError::InvalidUtf8 { name: file.name.clone() })?;

    let name = parse_name(&file.name);
    let declared = extract_declared_size(markup);
    let size = resolve_size(
        &name,
        &declared,
        options.add_size,
        &options.default_width,
        &options.default_height,
    );

    let minified = minifier
        .minify(markup)
        .map_err(|source| TransformError::Minify { name: file.name.clone(), source })?;

    Ok(IconRecord::new(name.identifier, escape_markup(&minified), size).with_source(&file.name))
}
