//! svgless - bundle SVG icons into a single LESS stylesheet
//!
//! Each icon becomes one block in the generated `.less` file, carrying its
//! minified markup as an inline `data:` URI:
//!
//! - rule mode emits concrete rules (`.icon-close { ... }`)
//! - mixin mode emits mixins (`.icon-close() { ... }`) to be invoked elsewhere
//!
//! Sizes can be emitted too, taken from the file name (`close.16x16.svg`),
//! the root `<svg>` element's `width`/`height`, or configured defaults.
//!
//! ```
//! use svgless::{transform, IconFile, OutputOptions};
//!
//! let icons = vec![IconFile::new("close.16x16.svg", r#"<svg width="8" height="8"/>"#)];
//! let options = OutputOptions { add_size: true, ..OutputOptions::default() };
//! let artifact = transform(options, icons).unwrap().unwrap();
//!
//! assert_eq!(artifact.name, "icons.less");
//! assert!(artifact.text().starts_with(".icon-close {"));
//! assert!(artifact.text().contains("width: 16px;"));
//! ```

pub mod aggregate;
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod markup;
pub mod minify;
pub mod name;
pub mod record;
pub mod render;
pub mod size;
pub mod stage;

pub use config::{DuplicatePolicy, OutputOptions};
pub use error::TransformError;
pub use escape::escape_markup;
pub use markup::{extract_declared_size, DeclaredSize};
pub use minify::{Minify, MinifyError, SvgMinifier};
pub use name::{parse_name, ParsedName};
pub use record::{build_record, IconFile, IconRecord};
pub use render::{renderer_for, MixinRenderer, Render, RuleRenderer};
pub use size::{resolve_size, ResolvedSize};
pub use stage::{transform, Artifact, StageState, TransformStage};
