//! Build progress reporting.
//!
//! Provides a flexible progress reporting system for build operations.
//! Supports console output (with colors), JSON lines, and a silent reporter.
//!
//! # Example
//!
//! ```
//! use svgless::build::progress::{ConsoleProgress, ProgressEvent, ProgressReporter};
//!
//! let reporter = ConsoleProgress::with_output(std::io::sink());
//! reporter.report(ProgressEvent::BuildStarted { total_icons: 2 });
//! reporter.report(ProgressEvent::IconProcessed {
//!     file: "close.svg".to_string(),
//!     identifier: "close".to_string(),
//! });
//! reporter.report(ProgressEvent::BuildCompleted { success: true, icons: 2, duration_ms: 12 });
//! ```

use serde_json::json;
use std::io::Write;
use std::sync::Mutex;

/// Events that can be reported during a build.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Build started
    BuildStarted {
        /// Number of icon files discovered
        total_icons: usize,
    },
    /// An icon was turned into a record
    IconProcessed {
        /// Source file name
        file: String,
        /// Derived identifier
        identifier: String,
    },
    /// The stylesheet was written
    ArtifactWritten {
        /// Output path
        path: String,
        /// Number of blocks in the stylesheet
        icons: usize,
    },
    /// Build finished
    BuildCompleted {
        /// Whether the build succeeded
        success: bool,
        /// Number of icons rendered
        icons: usize,
        /// Total duration in milliseconds
        duration_ms: u64,
    },
    /// A warning was generated
    Warning {
        /// File that generated the warning (if applicable)
        file: Option<String>,
        /// Warning message
        message: String,
    },
    /// An error occurred
    Error {
        /// File that generated the error (if applicable)
        file: Option<String>,
        /// Error message
        message: String,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event.
    fn report(&self, event: ProgressEvent);

    /// Check if this reporter wants verbose output.
    fn is_verbose(&self) -> bool {
        false
    }
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl NullProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Console progress reporter with optional colors.
pub struct ConsoleProgress {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show per-icon lines
    verbose: bool,
    /// Output writer (for testing)
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProgress")
            .field("use_colors", &self.use_colors)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ConsoleProgress {
    /// Create a console reporter on stderr, colored when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
            verbose: false,
            output: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Create a console progress reporter that writes to a custom output.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self {
            use_colors: false, // Disable colors for custom output
            verbose: false,
            output: Mutex::new(Box::new(output)),
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.color(text, "\x1b[32m")
    }

    fn yellow(&self, text: &str) -> String {
        self.color(text, "\x1b[33m")
    }

    fn red(&self, text: &str) -> String {
        self.color(text, "\x1b[31m")
    }

    fn cyan(&self, text: &str) -> String {
        self.color(text, "\x1b[36m")
    }

    fn writeln(&self, line: &str) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", line);
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

fn file_prefix(file: Option<String>) -> String {
    match file {
        Some(f) => format!("{}: ", f),
        None => String::new(),
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::BuildStarted { total_icons } => {
                self.writeln(&format!(
                    "{} Bundling {}...",
                    self.cyan("[build]"),
                    plural(total_icons, "icon")
                ));
            }
            ProgressEvent::IconProcessed { file, identifier } => {
                if self.verbose {
                    self.writeln(&format!("{} {} -> {}", self.cyan("[icon]"), file, identifier));
                }
            }
            ProgressEvent::ArtifactWritten { path, icons } => {
                self.writeln(&format!(
                    "{} {} ({})",
                    self.green("[write]"),
                    path,
                    plural(icons, "block")
                ));
            }
            ProgressEvent::BuildCompleted { success, icons, duration_ms } => {
                let duration = format_duration(duration_ms);
                if success {
                    self.writeln(&format!(
                        "{} {} bundled in {}",
                        self.green("[done]"),
                        plural(icons, "icon"),
                        duration
                    ));
                } else {
                    self.writeln(&format!("{} Build failed after {}", self.red("[error]"), duration));
                }
            }
            ProgressEvent::Warning { file, message } => {
                self.writeln(&format!("{} {}{}", self.yellow("[warn]"), file_prefix(file), message));
            }
            ProgressEvent::Error { file, message } => {
                self.writeln(&format!("{} {}{}", self.red("[error]"), file_prefix(file), message));
            }
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// JSON progress reporter for machine-readable output, one object per line.
pub struct JsonProgress {
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for JsonProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonProgress").finish()
    }
}

impl JsonProgress {
    /// Create a new JSON progress reporter writing to stderr.
    pub fn new() -> Self {
        Self { output: Mutex::new(Box::new(std::io::stderr())) }
    }

    /// Create a JSON progress reporter that writes to a custom output.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self { output: Mutex::new(Box::new(output)) }
    }

    fn write_json(&self, value: serde_json::Value) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", value);
        }
    }
}

impl Default for JsonProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for JsonProgress {
    fn report(&self, event: ProgressEvent) {
        let value = match event {
            ProgressEvent::BuildStarted { total_icons } => {
                json!({ "event": "build_started", "total_icons": total_icons })
            }
            ProgressEvent::IconProcessed { file, identifier } => {
                json!({ "event": "icon_processed", "file": file, "identifier": identifier })
            }
            ProgressEvent::ArtifactWritten { path, icons } => {
                json!({ "event": "artifact_written", "path": path, "icons": icons })
            }
            ProgressEvent::BuildCompleted { success, icons, duration_ms } => json!({
                "event": "build_completed",
                "success": success,
                "icons": icons,
                "duration_ms": duration_ms,
            }),
            ProgressEvent::Warning { file, message } => {
                json!({ "event": "warning", "file": file, "message": message })
            }
            ProgressEvent::Error { file, message } => {
                json!({ "event": "error", "file": file, "message": message })
            }
        };
        self.write_json(value);
    }
}

/// Format a duration in milliseconds to a human-readable string.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1000;
        format!("{}m {}s", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn captured() -> (Arc<Mutex<Vec<u8>>>, TestWriter) {
        let output = Arc::new(Mutex::new(Vec::new()));
        let writer = TestWriter(Arc::clone(&output));
        (output, writer)
    }

    fn text(output: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8_lossy(&output.lock().unwrap()).into_owned()
    }

    #[test]
    fn test_null_progress() {
        let reporter = NullProgress::new();
        reporter.report(ProgressEvent::BuildStarted { total_icons: 10 });
        assert!(!reporter.is_verbose());
    }

    #[test]
    fn test_console_build_started() {
        let (output, writer) = captured();
        let reporter = ConsoleProgress::with_output(writer);
        reporter.report(ProgressEvent::BuildStarted { total_icons: 5 });
        reporter.report(ProgressEvent::BuildStarted { total_icons: 1 });

        let text = text(&output);
        assert!(text.contains("[build] Bundling 5 icons..."));
        assert!(text.contains("[build] Bundling 1 icon..."));
    }

    #[test]
    fn test_console_icon_lines_only_when_verbose() {
        let (output, writer) = captured();
        let reporter = ConsoleProgress::with_output(writer);
        let event = ProgressEvent::IconProcessed {
            file: "close.16x16.svg".to_string(),
            identifier: "close".to_string(),
        };
        reporter.report(event.clone());
        assert!(text(&output).is_empty());

        let reporter = reporter.with_verbose(true);
        assert!(reporter.is_verbose());
        reporter.report(event);
        assert!(text(&output).contains("close.16x16.svg -> close"));
    }

    #[test]
    fn test_console_completed_and_warning() {
        let (output, writer) = captured();
        let reporter = ConsoleProgress::with_output(writer);
        reporter.report(ProgressEvent::Warning {
            file: Some("a.svg".to_string()),
            message: "replaced".to_string(),
        });
        reporter.report(ProgressEvent::BuildCompleted { success: true, icons: 2, duration_ms: 150 });
        reporter.report(ProgressEvent::BuildCompleted { success: false, icons: 0, duration_ms: 1500 });

        let text = text(&output);
        assert!(text.contains("[warn] a.svg: replaced"));
        assert!(text.contains("[done] 2 icons bundled in 150ms"));
        assert!(text.contains("[error] Build failed after 1.5s"));
    }

    #[test]
    fn test_console_colors() {
        let (output, writer) = captured();
        let reporter = ConsoleProgress::with_output(writer).with_colors(true);
        reporter.report(ProgressEvent::Error { file: None, message: "boom".to_string() });
        assert!(text(&output).contains("\x1b[31m[error]\x1b[0m boom"));
    }

    #[test]
    fn test_json_events() {
        let (output, writer) = captured();
        let reporter = JsonProgress::with_output(writer);
        reporter.report(ProgressEvent::BuildStarted { total_icons: 2 });
        reporter.report(ProgressEvent::Warning { file: None, message: "say \"hi\"".to_string() });
        reporter.report(ProgressEvent::ArtifactWritten { path: "build/icons.less".to_string(), icons: 2 });

        let text = text(&output);
        let lines: Vec<serde_json::Value> =
            text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["event"], "build_started");
        assert_eq!(lines[0]["total_icons"], 2);
        assert_eq!(lines[1]["message"], "say \"hi\"");
        assert!(lines[1]["file"].is_null());
        assert_eq!(lines[2]["path"], "build/icons.less");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0ms");
        assert_eq!(format_duration(999), "999ms");
        assert_eq!(format_duration(1500), "1.5s");
        assert_eq!(format_duration(90000), "1m 30s");
    }

    // Helper for testing output
    struct TestWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
