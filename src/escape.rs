//! Escaping of minified markup for embedding in a LESS string literal
//!
//! The markup ends up inside `url("data:image/svg+xml;charset=utf8,...")`, so
//! it must neither close the double-quoted literal nor trigger LESS string
//! interpolation (`@{var}`) or JavaScript evaluation (backticks), and it must
//! not carry characters that are structural in a data URI (`#`, `%`) or in
//! the stylesheet itself (`{`, `}`). Everything risky is percent-encoded, so a
//! browser decoding the data URI sees the original markup again.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes percent-encoded on top of ASCII controls. Non-ASCII is always encoded.
const EMBEDDED_MARKUP: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'{')
    .add(b'}')
    .add(b'@')
    .add(b'\\')
    .add(b'`');

/// Escape markup for embedding. Total over every input string.
///
/// # Examples
///
/// ```
/// use svgless::escape::escape_markup;
///
/// assert_eq!(
///     escape_markup(r##"<svg fill="#fff"/>"##),
///     "%3Csvg fill=%22%23fff%22/%3E"
/// );
/// ```
pub fn escape_markup(markup: &str) -> String {
    utf8_percent_encode(markup, EMBEDDED_MARKUP).to_string()
}
