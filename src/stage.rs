//! The transform stage
//!
//! A push-driven state machine sitting between the file plumbing and the
//! renderer. Icons are pushed one at a time while the stage is `Collecting`;
//! [`TransformStage::finish`] flushes it exactly once and yields at most one
//! [`Artifact`]. The first error moves the stage to `Failed`, after which no
//! artifact is ever produced.

use crate::aggregate::{Aggregator, PushOutcome};
use crate::build::progress::{NullProgress, ProgressEvent, ProgressReporter};
use crate::config::OutputOptions;
use crate::error::TransformError;
use crate::minify::{Minify, SvgMinifier};
use crate::record::{build_record, IconFile};
use crate::render::{renderer_for, Render};
use std::sync::Arc;

/// The generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// `{file_name}.less`
    pub name: String,
    pub contents: Vec<u8>,
    /// Number of icon blocks rendered
    pub icons: usize,
}

impl Artifact {
    /// Contents as text. Rendered output is always UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.contents)
    }
}

/// Lifecycle of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    /// Accepting icons
    Collecting,
    /// An icon failed; the run is over
    Failed,
    /// End of input was signalled
    Flushed,
}

/// Sequential, order-preserving transform of icons into one stylesheet.
pub struct TransformStage<M: Minify = SvgMinifier> {
    options: OutputOptions,
    minifier: M,
    renderer: Box<dyn Render>,
    reporter: Arc<dyn ProgressReporter>,
    aggregator: Option<Aggregator>,
    state: StageState,
}

impl TransformStage<SvgMinifier> {
    /// Create a stage using the built-in minifier.
    pub fn new(options: OutputOptions) -> Result<Self, TransformError> {
        Self::with_minifier(options, SvgMinifier)
    }
}

impl<M: Minify> TransformStage<M> {
    /// Create a stage with an injected minifier.
    ///
    /// Fails with [`TransformError::InvalidOptions`] when the options would
    /// render an invalid stylesheet (bad prefix, defaults without a unit).
    pub fn with_minifier(options: OutputOptions, minifier: M) -> Result<Self, TransformError> {
        let problems = options.validate();
        if !problems.is_empty() {
            return Err(TransformError::InvalidOptions(
                problems.into_iter().map(|e| e.to_string()).collect(),
            ));
        }

        let renderer = renderer_for(&options);
        let aggregator = Some(Aggregator::new(options.duplicates));
        Ok(Self {
            options,
            minifier,
            renderer,
            reporter: Arc::new(NullProgress),
            aggregator,
            state: StageState::Collecting,
        })
    }

    /// Route collision warnings and per-icon events to a reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Replace the renderer chosen from the options.
    pub fn with_renderer(mut self, renderer: Box<dyn Render>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    pub fn state(&self) -> StageState {
        self.state
    }

    /// Number of records buffered so far.
    pub fn pending(&self) -> usize {
        self.aggregator.as_ref().map_or(0, Aggregator::len)
    }

    /// Process one icon.
    pub fn push(&mut self, file: IconFile) -> Result<(), TransformError> {
        match self.state {
            StageState::Collecting => {}
            StageState::Failed => return Err(TransformError::Aborted),
            StageState::Flushed => return Err(TransformError::AlreadyFlushed),
        }

        let result = self.accept(&file);
        if result.is_err() {
            self.state = StageState::Failed;
            self.aggregator = None;
        }
        result
    }

    fn accept(&mut self, file: &IconFile) -> Result<(), TransformError> {
        let record = build_record(file, &self.options, &self.minifier)?;
        let identifier = record.identifier.clone();

        let aggregator = self.aggregator.as_mut().ok_or(TransformError::Aborted)?;
        if let PushOutcome::Replaced { previous_source } = aggregator.push(record)? {
            self.reporter.report(ProgressEvent::Warning {
                file: Some(file.name.clone()),
                message: format!(
                    "identifier '{}' already used by {}; replacing it",
                    identifier, previous_source
                ),
            });
        }

        self.reporter.report(ProgressEvent::IconProcessed { file: file.name.clone(), identifier });
        Ok(())
    }

    /// Signal end of input.
    ///
    /// Returns `Ok(None)` when no icon was pushed, otherwise the single
    /// rendered artifact.
    pub fn finish(&mut self) -> Result<Option<Artifact>, TransformError> {
        match self.state {
            StageState::Collecting => {}
            StageState::Failed => return Err(TransformError::Aborted),
            StageState::Flushed => return Err(TransformError::AlreadyFlushed),
        }
        self.state = StageState::Flushed;

        let records = self.aggregator.take().map(Aggregator::finish).unwrap_or_default();
        if records.is_empty() {
            return Ok(None);
        }

        Ok(Some(Artifact {
            name: self.options.artifact_name(),
            contents: self.renderer.render(&records).into_bytes(),
            icons: records.len(),
        }))
    }
}

/// Run a whole stage over a sequence of icons.
pub fn transform<I>(options: OutputOptions, files: I) -> Result<Option<Artifact>, TransformError>
where
    I: IntoIterator<Item = IconFile>,
{
    let mut stage = TransformStage::new(options)?;
    for file in files {
        stage.push(file)?;
    }
    stage.finish()
}
