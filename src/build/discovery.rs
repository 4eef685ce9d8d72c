//! Icon source discovery for the build system.
//!
//! Expands the configured glob patterns below the source directory and
//! returns `.svg` files in a stable, sorted order. That order is the arrival
//! order the transform stage sees.

use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error during source discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Invalid glob pattern
    #[error("Invalid glob pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),
    /// Source directory does not exist
    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),
}

/// Discover icon files matching one glob pattern.
///
/// Unreadable entries are skipped with a warning on stderr.
pub fn discover_files(base_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let full_pattern = base_dir.join(pattern);
    let pattern_str = full_pattern.to_string_lossy();

    let paths =
        glob(&pattern_str).map_err(|e| DiscoveryError::InvalidPattern(pattern.to_string(), e))?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() && is_svg_file(&path) {
                    files.push(path);
                }
            }
            Err(e) => {
                eprintln!("Warning: error reading path: {}", e);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Check if a path is an SVG icon.
pub fn is_svg_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Discover all icons for a set of patterns, deduplicated and sorted.
pub fn discover_icons(src_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !src_dir.is_dir() {
        return Err(DiscoveryError::MissingSourceDir(src_dir.to_path_buf()));
    }

    let mut all_files = BTreeSet::new();
    for pattern in patterns {
        all_files.extend(discover_files(src_dir, pattern)?);
    }
    Ok(all_files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "<svg/>").unwrap();
    }

    #[test]
    fn test_is_svg_file() {
        assert!(is_svg_file(Path::new("a.svg")));
        assert!(is_svg_file(Path::new("a.16x16.SVG")));
        assert!(!is_svg_file(Path::new("a.png")));
        assert!(!is_svg_file(Path::new("svg")));
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.svg");
        touch(temp.path(), "a.svg");
        touch(temp.path(), "notes.txt");
        touch(temp.path(), "nested/c.svg");

        let files = discover_icons(temp.path(), &["**/*.svg".to_string()]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.svg", "b.svg", "nested/c.svg"]);
    }

    #[test]
    fn test_overlapping_patterns_deduplicated() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.svg");
        touch(temp.path(), "ui/b.svg");

        let patterns = vec!["*.svg".to_string(), "**/*.svg".to_string()];
        let files = discover_icons(temp.path(), &patterns).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_source_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = discover_icons(&missing, &["*.svg".to_string()]).unwrap_err();
        assert!(matches!(err, DiscoveryError::MissingSourceDir(_)));
    }

    #[test]
    fn test_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        let err = discover_icons(temp.path(), &["[".to_string()]).unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidPattern(..)));
    }
}
