//! Markup minification
//!
//! The transform stage takes any [`Minify`] implementation. [`SvgMinifier`] is
//! the built-in one: it drops the XML prolog, comments and DOCTYPE, removes
//! whitespace between tags and collapses the rest.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Minification failure for a single icon
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinifyError {
    /// Nothing element-like was left to embed
    #[error("markup contains no element")]
    NoElement,
    /// Failure reported by an external minifier
    #[error("{0}")]
    Other(String),
}

/// Reduce markup to a compact canonical form.
pub trait Minify {
    fn minify(&self, markup: &str) -> Result<String, MinifyError>;
}

impl<F> Minify for F
where
    F: Fn(&str) -> Result<String, MinifyError>,
{
    fn minify(&self, markup: &str) -> Result<String, MinifyError> {
        self(markup)
    }
}

/// Built-in whitespace and comment stripping minifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgMinifier;

struct Patterns {
    prolog: Regex,
    comment: Regex,
    doctype: Regex,
    between_tags: Regex,
    whitespace: Regex,
    element: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        prolog: Regex::new(r"(?s)<\?.*?\?>").expect("valid prolog pattern"),
        comment: Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"),
        doctype: Regex::new(r"(?is)<!DOCTYPE[^\[>]*(\[.*?\])?\s*>").expect("valid doctype pattern"),
        between_tags: Regex::new(r">\s+<").expect("valid whitespace pattern"),
        whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
        element: Regex::new(r"<[A-Za-z_]").expect("valid element pattern"),
    })
}

impl Minify for SvgMinifier {
    fn minify(&self, markup: &str) -> Result<String, MinifyError> {
        let p = patterns();

        let out = p.prolog.replace_all(markup, "");
        let out = p.comment.replace_all(&out, "");
        let out = p.doctype.replace_all(&out, "");
        let out = p.between_tags.replace_all(&out, "><");
        let out = p.whitespace.replace_all(&out, " ");
        let out = out.trim();

        if !p.element.is_match(out) {
            return Err(MinifyError::NoElement);
        }
        Ok(out.to_string())
    }
}
