//! Build system for svgless projects.
//!
//! Discovers icons under the configured source directory, runs them through
//! the transform stage and writes the resulting stylesheet.

pub mod discovery;
pub mod pipeline;
pub mod progress;
pub mod result;

pub use discovery::{discover_icons, DiscoveryError};
pub use pipeline::{read_icon, BuildError, BuildPipeline};
pub use progress::{ConsoleProgress, JsonProgress, NullProgress, ProgressEvent, ProgressReporter};
pub use result::BuildResult;
