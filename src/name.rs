//! Icon file name parsing
//!
//! Derives the selector identifier and an optional explicit size from an icon's
//! file name. A size can be baked into the name as a trailing `.<W>x<H>` token:
//!
//! - `collapsed.svg` -> identifier `collapsed`, no explicit size
//! - `collapsed.16x16.svg` -> identifier `collapsed`, explicit size 16 x 16
//! - `arrow.left.svg` -> identifier `arrow-left`, no explicit size

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Identifier and optional explicit size parsed from a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Sanitized identifier used to build the selector or mixin name
    pub identifier: String,
    /// Width from a `<W>x<H>` name token (unit-less digits)
    pub explicit_width: Option<String>,
    /// Height from a `<W>x<H>` name token (unit-less digits)
    pub explicit_height: Option<String>,
}

impl ParsedName {
    /// Whether the file name carried a size token.
    pub fn has_explicit_size(&self) -> bool {
        self.explicit_width.is_some() && self.explicit_height.is_some()
    }
}

fn size_token() -> &'static Regex {
    static SIZE_TOKEN: OnceLock<Regex> = OnceLock::new();
    SIZE_TOKEN.get_or_init(|| {
        Regex::new(r"^(?P<stem>.+)\.(?P<width>[0-9]+)[xX](?P<height>[0-9]+)$")
            .expect("size token pattern is valid")
    })
}

/// Parse a raw icon file name.
///
/// Leading directories are ignored and the final extension is stripped. Never
/// fails: a name without a size token simply yields no explicit size.
///
/// # Examples
///
/// ```
/// use svgless::name::parse_name;
///
/// let parsed = parse_name("expanded.16x16.svg");
/// assert_eq!(parsed.identifier, "expanded");
/// assert_eq!(parsed.explicit_width.as_deref(), Some("16"));
/// assert_eq!(parsed.explicit_height.as_deref(), Some("16"));
/// ```
pub fn parse_name(file_name: &str) -> ParsedName {
    let path = Path::new(file_name);
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();

    match size_token().captures(&stem) {
        Some(caps) => ParsedName {
            identifier: sanitize_identifier(&caps["stem"]),
            explicit_width: Some(caps["width"].to_string()),
            explicit_height: Some(caps["height"].to_string()),
        },
        None => ParsedName {
            identifier: sanitize_identifier(&stem),
            explicit_width: None,
            explicit_height: None,
        },
    }
}

/// Replace every character that cannot appear in a class name with `-`.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}
