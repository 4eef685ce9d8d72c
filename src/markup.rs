//! Declared size extraction from SVG markup
//!
//! Reads the `width` and `height` attributes of the root `<svg>` element.
//! Nested elements are never inspected and malformed markup is not an error:
//! it simply declares no size.

use crate::size::is_length;
use roxmltree::{Document, ParsingOptions};

/// Size attributes found on the root element, as written in the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredSize {
    /// Root `width` attribute (e.g. `"1234px"`, `"12345"`, `"50%"`)
    pub width: Option<String>,
    /// Root `height` attribute
    pub height: Option<String>,
}

/// Extract the declared width/height from raw markup.
///
/// Values are returned verbatim apart from surrounding whitespace. A bare
/// number stays bare; units are added during size resolution. A value that is
/// not a plain length (`auto`, `calc(..)`, entity-decoded punctuation) counts
/// as absent, so nothing from the markup reaches the stylesheet unescaped.
///
/// # Examples
///
/// ```
/// use svgless::markup::extract_declared_size;
///
/// let size = extract_declared_size(r#"<svg width="12345" height="54321px"/>"#);
/// assert_eq!(size.width.as_deref(), Some("12345"));
/// assert_eq!(size.height.as_deref(), Some("54321px"));
/// ```
pub fn extract_declared_size(markup: &str) -> DeclaredSize {
    // Editor exports frequently carry a DOCTYPE
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let Ok(doc) = Document::parse_with_options(markup, options) else {
        return DeclaredSize::default();
    };

    let root = doc.root_element();
    DeclaredSize { width: size_attribute(root, "width"), height: size_attribute(root, "height") }
}

fn size_attribute(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::trim).filter(|v| is_length(v)).map(str::to_string)
}
