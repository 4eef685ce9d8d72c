//! svgless - Command-line tool for bundling SVG icons into a LESS stylesheet

use std::process::ExitCode;

use svgless::cli;

fn main() -> ExitCode {
    cli::run()
}
