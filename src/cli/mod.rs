//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;
mod inspect;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::loader::CliOverrides;
use crate::config::DuplicatePolicy;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// svgless - Bundle SVG icons into a LESS stylesheet
#[derive(Parser)]
#[command(name = "svgless")]
#[command(about = "svgless - Bundle SVG icons into a single LESS stylesheet of data-URI rules or mixins")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Stylesheet options shared by every subcommand; each one overrides svgless.toml
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Config file (default: nearest svgless.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit width/height declarations
    #[arg(long)]
    pub add_size: bool,

    /// Emit mixins (`.icon-x()`) instead of concrete rules
    #[arg(long)]
    pub mixin: bool,

    /// Selector/mixin name prefix (default: "icon-")
    #[arg(long)]
    pub prefix: Option<String>,

    /// Width used when neither file name nor markup declares one (default: 16px)
    #[arg(long)]
    pub default_width: Option<String>,

    /// Height used when neither file name nor markup declares one (default: 16px)
    #[arg(long)]
    pub default_height: Option<String>,

    /// Fail instead of letting the later icon win on identifier collisions
    #[arg(long)]
    pub reject_duplicates: bool,
}

impl OutputArgs {
    /// Turn flags into config overrides; unset flags leave the config alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            add_size: self.add_size.then_some(true),
            output_mixin: self.mixin.then_some(true),
            mixin_prefix: self.prefix.clone(),
            default_width: self.default_width.clone(),
            default_height: self.default_height.clone(),
            duplicates: self.reject_duplicates.then_some(DuplicatePolicy::Reject),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bundle every icon in the source directory into one stylesheet
    Build {
        /// Source directory (overrides project.src)
        #[arg(long)]
        src: Option<PathBuf>,

        /// Output directory (overrides project.out)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Stylesheet base name without extension (default: "icons")
        #[arg(long)]
        file_name: Option<String>,

        #[command(flatten)]
        output: OutputArgs,

        /// Render but don't write the stylesheet
        #[arg(long)]
        dry_run: bool,

        /// Report progress as JSON lines on stderr
        #[arg(long)]
        json: bool,

        /// Show one line per icon
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a single icon is named, sized and rendered
    Inspect {
        /// Icon file to inspect
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { src, out, file_name, output, dry_run, json, verbose } => {
            let mut overrides = output.overrides();
            overrides.src = src;
            overrides.out = out;
            overrides.file_name = file_name;
            build::run_build(output.config.as_deref(), &overrides, dry_run, json, verbose)
        }
        Commands::Inspect { file, output, json } => {
            inspect::run_inspect(&file, output.config.as_deref(), &output.overrides(), json)
        }
    }
}
