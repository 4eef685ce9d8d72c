//! Effective icon size resolution
//!
//! Each axis is resolved independently, first match wins:
//!
//! 1. explicit size from the file name, suffixed with `px`
//! 2. declared size from the root element, with `px` appended when unit-less
//! 3. configured default, used verbatim
//!
//! Only plain CSS lengths (`16`, `1.5em`, `50%`) are ever emitted; anything
//! else read from markup is treated as undeclared.

use crate::markup::DeclaredSize;
use crate::name::ParsedName;
use regex::Regex;
use std::sync::OnceLock;

/// Width and height literals, each carrying a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSize {
    pub width: String,
    pub height: String,
}

/// Resolve the emitted size for one icon.
///
/// Returns `None` when `add_size` is off.
pub fn resolve_size(
    name: &ParsedName,
    declared: &DeclaredSize,
    add_size: bool,
    default_width: &str,
    default_height: &str,
) -> Option<ResolvedSize> {
    if !add_size {
        return None;
    }

    Some(ResolvedSize {
        width: resolve_axis(name.explicit_width.as_deref(), declared.width.as_deref(), default_width),
        height: resolve_axis(
            name.explicit_height.as_deref(),
            declared.height.as_deref(),
            default_height,
        ),
    })
}

fn resolve_axis(explicit: Option<&str>, declared: Option<&str>, default: &str) -> String {
    if let Some(value) = explicit {
        return format!("{}px", value);
    }
    if let Some(value) = declared {
        return with_unit(value);
    }
    default.to_string()
}

/// Append `px` to a bare number, leave anything with a unit alone.
pub fn with_unit(value: &str) -> String {
    if has_unit(value) {
        value.to_string()
    } else {
        format!("{}px", value)
    }
}

fn length_pattern() -> &'static Regex {
    static LENGTH: OnceLock<Regex> = OnceLock::new();
    LENGTH.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[A-Za-z]+|%)?$")
            .expect("length pattern is valid")
    })
}

/// Whether `value` is a number with an optional unit and nothing else.
pub fn is_length(value: &str) -> bool {
    length_pattern().is_match(value)
}

/// A size literal carries a unit unless it ends in a digit or a decimal point.
pub fn has_unit(value: &str) -> bool {
    match value.chars().last() {
        Some(c) => !(c.is_ascii_digit() || c == '.'),
        None => false,
    }
}
