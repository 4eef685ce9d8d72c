//! Build command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::build::{BuildPipeline, ConsoleProgress, JsonProgress, ProgressReporter};
use crate::config::loader::{find_config, load_config, merge_cli_overrides, validated, CliOverrides};
use crate::config::SvglessConfig;

/// Load configuration and work out the project root it is relative to.
pub(super) fn resolve_config(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    verbose: bool,
) -> Result<(SvglessConfig, PathBuf), ExitCode> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let discovered = match config_path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    let (mut config, root) = match discovered {
        Some(path) => {
            if verbose {
                eprintln!("Using config: {}", path.display());
            }
            let config = load_config(Some(&path)).map_err(|e| {
                eprintln!("Error loading config: {}", e);
                ExitCode::from(EXIT_INVALID_ARGS)
            })?;
            let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
            (config, root)
        }
        None => {
            if verbose {
                eprintln!("No svgless.toml found, using defaults");
            }
            (SvglessConfig::default(), cwd.clone())
        }
    };

    merge_cli_overrides(&mut config, overrides);

    // CLI paths are relative to where the command runs, not the config file
    if let Some(src) = &overrides.src {
        config.project.src = cwd.join(src);
    }
    if let Some(out) = &overrides.out {
        config.project.out = cwd.join(out);
    }

    let config = validated(config).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })?;
    Ok((config, root))
}

/// Run the build command
pub fn run_build(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    dry_run: bool,
    json: bool,
    verbose: bool,
) -> ExitCode {
    let (config, root) = match resolve_config(config_path, overrides, verbose && !json) {
        Ok(resolved) => resolved,
        Err(code) => return code,
    };

    let reporter: Arc<dyn ProgressReporter> = if json {
        Arc::new(JsonProgress::new())
    } else {
        Arc::new(ConsoleProgress::new().with_verbose(verbose))
    };

    let pipeline = BuildPipeline::new(config, root).with_reporter(reporter).with_dry_run(dry_run);

    match pipeline.build() {
        Ok(result) => {
            match (&result.artifact, dry_run) {
                (Some(path), true) => {
                    println!("Dry run - would write {} ({} icons)", path.display(), result.icons)
                }
                (None, _) => println!("No icons found in {}", pipeline.src_dir().display()),
                _ => {}
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        // Already reported through the progress reporter
        Err(_) => ExitCode::from(EXIT_ERROR),
    }
}
