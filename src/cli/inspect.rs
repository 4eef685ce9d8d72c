//! Inspect command implementation

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use super::build::resolve_config;
use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::build::read_icon;
use crate::config::loader::CliOverrides;
use crate::config::OutputOptions;
use crate::markup::extract_declared_size;
use crate::name::parse_name;
use crate::size::resolve_size;
use crate::stage::transform;

/// Everything svgless derives from one icon
#[derive(Debug, Serialize)]
struct IconReport {
    file: String,
    identifier: String,
    selector: String,
    explicit_width: Option<String>,
    explicit_height: Option<String>,
    declared_width: Option<String>,
    declared_height: Option<String>,
    /// Size that would be emitted with sizes on
    width: String,
    height: String,
    size_emitted: bool,
    block: String,
}

fn inspect(path: &Path, options: &OutputOptions) -> Result<IconReport, String> {
    let icon = read_icon(path).map_err(|e| e.to_string())?;
    let markup = String::from_utf8_lossy(&icon.contents).into_owned();

    let name = parse_name(&icon.name);
    let declared = extract_declared_size(&markup);
    let size = resolve_size(&name, &declared, true, &options.default_width, &options.default_height)
        .ok_or_else(|| "size resolution failed".to_string())?;

    let artifact = transform(options.clone(), [icon.clone()]).map_err(|e| e.to_string())?;
    let block = artifact.map(|a| a.text().into_owned()).unwrap_or_default();

    let suffix = if options.output_mixin { "()" } else { "" };
    Ok(IconReport {
        file: icon.name,
        selector: format!(".{}{}{}", options.mixin_prefix, name.identifier, suffix),
        identifier: name.identifier,
        explicit_width: name.explicit_width,
        explicit_height: name.explicit_height,
        declared_width: declared.width,
        declared_height: declared.height,
        width: size.width,
        height: size.height,
        size_emitted: options.add_size,
        block,
    })
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Run the inspect command
pub fn run_inspect(
    file: &Path,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    json: bool,
) -> ExitCode {
    let (config, _) = match resolve_config(config_path, overrides, false) {
        Ok(resolved) => resolved,
        Err(code) => return code,
    };

    let report = match inspect(file, &config.output) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    println!("File:       {}", report.file);
    println!("Identifier: {}", report.identifier);
    println!("Selector:   {}", report.selector);
    println!(
        "Name size:  {} x {}",
        or_dash(&report.explicit_width),
        or_dash(&report.explicit_height)
    );
    println!(
        "Declared:   {} x {}",
        or_dash(&report.declared_width),
        or_dash(&report.declared_height)
    );
    println!(
        "Resolved:   {} x {}{}",
        report.width,
        report.height,
        if report.size_emitted { "" } else { " (not emitted, use --add-size)" }
    );
    println!();
    print!("{}", report.block);

    ExitCode::from(EXIT_SUCCESS)
}
