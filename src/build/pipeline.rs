//! Build pipeline orchestration.
//!
//! The pipeline is the file plumbing around the transform stage: it discovers
//! icons, feeds them to the stage in sorted path order, and writes the single
//! stylesheet when the stage produces one.

use crate::build::discovery::{discover_icons, DiscoveryError};
use crate::build::progress::{NullProgress, ProgressEvent, ProgressReporter};
use crate::build::result::BuildResult;
use crate::config::SvglessConfig;
use crate::error::TransformError;
use crate::record::IconFile;
use crate::stage::{Artifact, TransformStage};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Error during build execution.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Discovery error
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
    /// IO error
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Transform error
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Build pipeline for executing builds.
pub struct BuildPipeline {
    config: SvglessConfig,
    project_root: PathBuf,
    reporter: Arc<dyn ProgressReporter>,
    dry_run: bool,
}

impl BuildPipeline {
    /// Create a new build pipeline; relative config paths resolve against `project_root`.
    pub fn new(config: SvglessConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
            reporter: Arc::new(NullProgress),
            dry_run: false,
        }
    }

    /// Set the progress reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Set dry-run mode (render, but don't write).
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Absolute source directory.
    pub fn src_dir(&self) -> PathBuf {
        self.resolve(&self.config.project.src)
    }

    /// Absolute output directory.
    pub fn out_dir(&self) -> PathBuf {
        self.resolve(&self.config.project.out)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Run the build pipeline.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let outcome = self.run();

        let duration = start.elapsed();
        let (success, icons) = match &outcome {
            Ok(result) => (true, result.icons),
            Err(e) => {
                self.reporter.report(ProgressEvent::Error { file: None, message: e.to_string() });
                (false, 0)
            }
        };
        self.reporter.report(ProgressEvent::BuildCompleted {
            success,
            icons,
            duration_ms: duration.as_millis() as u64,
        });

        outcome.map(|result| result.with_duration(duration))
    }

    fn run(&self) -> Result<BuildResult, BuildError> {
        let sources = discover_icons(&self.src_dir(), &self.config.project.sources)?;
        self.reporter.report(ProgressEvent::BuildStarted { total_icons: sources.len() });

        let mut stage =
            TransformStage::new(self.config.output.clone())?.with_reporter(Arc::clone(&self.reporter));
        for path in &sources {
            stage.push(read_icon(path)?)?;
        }

        let mut result = BuildResult { sources, ..Default::default() };
        if let Some(artifact) = stage.finish()? {
            result.icons = artifact.icons;
            result.artifact = Some(self.write_artifact(&artifact)?);
        }
        Ok(result)
    }

    fn write_artifact(&self, artifact: &Artifact) -> Result<PathBuf, BuildError> {
        let out_dir = self.out_dir();
        let path = out_dir.join(&artifact.name);
        if self.dry_run {
            return Ok(path);
        }

        fs::create_dir_all(&out_dir).map_err(|source| BuildError::Io { path: out_dir.clone(), source })?;
        fs::write(&path, &artifact.contents)
            .map_err(|source| BuildError::Io { path: path.clone(), source })?;

        self.reporter.report(ProgressEvent::ArtifactWritten {
            path: path.display().to_string(),
            icons: artifact.icons,
        });
        Ok(path)
    }
}

/// Read one icon file from disk.
pub fn read_icon(path: &Path) -> Result<IconFile, BuildError> {
    let contents =
        fs::read(path).map_err(|source| BuildError::Io { path: path.to_path_buf(), source })?;
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    Ok(IconFile { name, contents })
}
