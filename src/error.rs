//! Transform error types

use crate::minify::MinifyError;
use thiserror::Error;

/// Error raised while turning icon files into a stylesheet.
///
/// Any of these aborts the run: no artifact is emitted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// Output options failed validation; no icon was processed
    #[error("invalid output options: {}", .0.join("; "))]
    InvalidOptions(Vec<String>),
    /// Icon contents are not valid UTF-8
    #[error("{name}: icon is not valid UTF-8")]
    InvalidUtf8 { name: String },
    /// The minifier rejected an icon
    #[error("{name}: minification failed: {source}")]
    Minify {
        name: String,
        #[source]
        source: MinifyError,
    },
    /// Two icons derived the same identifier under the `reject` policy
    #[error("duplicate icon identifier '{identifier}' ({first} and {second})")]
    DuplicateIdentifier { identifier: String, first: String, second: String },
    /// Input arrived, or finish was requested, after the stage was flushed
    #[error("transform stage already flushed")]
    AlreadyFlushed,
    /// An earlier icon failed; the run produces nothing
    #[error("transform stage aborted by an earlier error")]
    Aborted,
}
