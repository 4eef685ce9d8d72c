//! LESS stylesheet rendering
//!
//! Two renderers share one [`Render`] capability:
//!
//! - [`RuleRenderer`] emits concrete rules, `.icon-close { ... }`
//! - [`MixinRenderer`] emits mixins, `.icon-close() { ... }`, which produce no
//!   CSS until a consumer invokes them
//!
//! The renderer is picked once per run by [`renderer_for`]. Inside every block
//! the declaration order is fixed: `background-image`, then `width`, then
//! `height`.

use crate::config::OutputOptions;
use crate::record::IconRecord;
use std::fmt::Write;

/// Data URI scheme prefix for embedded markup
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf8,";

/// Turns icon records into stylesheet text.
pub trait Render {
    fn render(&self, records: &[IconRecord]) -> String;
}

/// Concrete rule per icon.
#[derive(Debug, Clone)]
pub struct RuleRenderer {
    prefix: String,
}

impl RuleRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Render for RuleRenderer {
    fn render(&self, records: &[IconRecord]) -> String {
        render_blocks(records, |record| format!(".{}{}", self.prefix, record.identifier))
    }
}

/// Parameterless mixin per icon.
#[derive(Debug, Clone)]
pub struct MixinRenderer {
    prefix: String,
}

impl MixinRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Render for MixinRenderer {
    fn render(&self, records: &[IconRecord]) -> String {
        render_blocks(records, |record| format!(".{}{}()", self.prefix, record.identifier))
    }
}

/// Select the renderer configured for this run.
pub fn renderer_for(options: &OutputOptions) -> Box<dyn Render> {
    if options.output_mixin {
        Box::new(MixinRenderer::new(options.mixin_prefix.clone()))
    } else {
        Box::new(RuleRenderer::new(options.mixin_prefix.clone()))
    }
}

fn render_blocks<F>(records: &[IconRecord], selector: F) -> String
where
    F: Fn(&IconRecord) -> String,
{
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} {{", selector(record));
        let _ = writeln!(
            out,
            "  background-image: url(\"{}{}\");",
            DATA_URI_PREFIX, record.escaped_markup
        );
        if let Some(size) = &record.size {
            let _ = writeln!(out, "  width: {};", size.width);
            let _ = writeln!(out, "  height: {};", size.height);
        }
        out.push_str("}\n");
    }
    out
}
