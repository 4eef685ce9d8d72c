//! CLI integration tests for the `svgless` binary.
//!
//! Runs the built binary inside temporary projects and checks exit codes,
//! written stylesheets and JSON output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/icons")
}

/// A temporary project holding copies of the given fixtures under `icons/`.
fn project(fixtures: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("icons");
    fs::create_dir_all(&icons).unwrap();
    for name in fixtures {
        fs::copy(fixtures_dir().join(name), icons.join(name)).unwrap();
    }
    temp
}

/// Run svgless in `dir` and return (stdout, stderr, exit code).
fn run_svgless(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_svgless"))
        .current_dir(dir)
        // Keep a user-level svgless.toml out of the picture
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .args(args)
        .output()
        .expect("Failed to execute svgless");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

// ============================================================================
// build
// ============================================================================

#[test]
fn test_build_with_defaults() {
    let temp = project(&["collapsed.svg", "nosize.svg"]);
    let (_, stderr, code) = run_svgless(temp.path(), &["build"]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let text = fs::read_to_string(temp.path().join("build/icons.less")).unwrap();
    assert!(text.starts_with(".icon-collapsed {"));
    assert!(text.contains(".icon-nosize {"));
    assert!(!text.contains("width:"));
}

#[test]
fn test_build_flags_override_config() {
    let temp = project(&["customsize.svg"]);
    fs::write(
        temp.path().join("svgless.toml"),
        "[output]\nfile_name = \"common\"\nmixin_prefix = \"cfg-\"\n",
    )
    .unwrap();

    let (_, stderr, code) = run_svgless(
        temp.path(),
        &["build", "--out", "css", "--mixin", "--add-size", "--prefix", "X-"],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);

    let text = fs::read_to_string(temp.path().join("css/common.less")).unwrap();
    assert!(text.starts_with(".X-customsize() {"));
    assert!(text.contains("  width: 1234px;\n  height: 4321px;\n"));
}

#[test]
fn test_build_dry_run() {
    let temp = project(&["collapsed.svg"]);
    let (stdout, _, code) = run_svgless(temp.path(), &["build", "--dry-run"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Dry run"), "stdout: {}", stdout);
    assert!(stdout.contains("1 icons"));
    assert!(!temp.path().join("build").exists());
}

#[test]
fn test_build_without_icons() {
    let temp = project(&[]);
    let (stdout, _, code) = run_svgless(temp.path(), &["build"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("No icons found"));
    assert!(!temp.path().join("build").exists());
}

#[test]
fn test_build_json_progress() {
    let temp = project(&["collapsed.svg", "expanded.svg"]);
    let (_, stderr, code) = run_svgless(temp.path(), &["build", "--json"]);
    assert_eq!(code, 0);

    let events: Vec<serde_json::Value> = stderr
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    let last = events.last().expect("at least one event");
    assert_eq!(last["event"], "build_completed");
    assert_eq!(last["success"], true);
    assert_eq!(last["icons"], 2);
}

#[test]
fn test_build_rejects_duplicates() {
    let temp = project(&["collapsed.svg"]);
    fs::create_dir_all(temp.path().join("icons/more")).unwrap();
    fs::copy(fixtures_dir().join("nosize.svg"), temp.path().join("icons/more/collapsed.svg"))
        .unwrap();

    let (_, stderr, code) = run_svgless(temp.path(), &["build", "--reject-duplicates"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("duplicate icon identifier 'collapsed'"), "stderr: {}", stderr);
    assert!(!temp.path().join("build/icons.less").exists());
}

#[test]
fn test_invalid_config_exit_code() {
    let temp = project(&["collapsed.svg"]);
    fs::write(temp.path().join("svgless.toml"), "[output]\nunknown_option = true\n").unwrap();

    let (_, stderr, code) = run_svgless(temp.path(), &["build"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Error loading config"));
}

// ============================================================================
// inspect
// ============================================================================

#[test]
fn test_inspect_json() {
    let temp = project(&["nopxinsize.svg"]);
    let (stdout, stderr, code) =
        run_svgless(temp.path(), &["inspect", "icons/nopxinsize.svg", "--json"]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["identifier"], "nopxinsize");
    assert_eq!(report["selector"], ".icon-nopxinsize");
    assert_eq!(report["declared_width"], "12345");
    assert_eq!(report["width"], "12345px");
    assert_eq!(report["height"], "54321px");
}

#[test]
fn test_inspect_text() {
    let temp = project(&["collapsed.svg"]);
    let (stdout, _, code) =
        run_svgless(temp.path(), &["inspect", "icons/collapsed.svg", "--mixin"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Selector:   .icon-collapsed()"));
    assert!(stdout.contains("not emitted"));
}

#[test]
fn test_inspect_missing_file() {
    let temp = project(&[]);
    let (_, stderr, code) = run_svgless(temp.path(), &["inspect", "icons/missing.svg"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("missing.svg"));
}
