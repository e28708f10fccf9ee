//! # typeloc
//!
//! A CLI tool that reports lines of code by file type.
//!
//! ## Overview
//!
//! typeloc scans a directory tree once, classifies each file by
//! extension, special filename, or shebang, and prints a per-type
//! summary sorted by line count. Build output, caches, and vendored
//! dependency directories are skipped.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize the current directory
//! typeloc
//!
//! # Summarize another tree
//! typeloc path/to/project
//!
//! # Ignore blank lines
//! typeloc --non-empty
//! ```
//!
//! Exits with status 2 when the root is not a directory, 0 otherwise.

use std::env;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use typeloclib::{render_report, scan, LineMode, ScanOptions, TypelocError};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("typeloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report lines of code by file type")
        .arg(
            Arg::new("root")
                .help("Root directory to scan (default: .)")
                .default_value("."),
        )
        .arg(
            Arg::new("non-empty")
                .long("non-empty")
                .action(ArgAction::SetTrue)
                .help("Count only non-empty lines"),
        )
}

/// Scan the requested root and print the report.
fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let root = matches
        .get_one::<String>("root")
        .map(|s| s.as_str())
        .unwrap_or(".");

    let mode = if matches.get_flag("non-empty") {
        LineMode::NonBlank
    } else {
        LineMode::All
    };

    let summary = scan(root, ScanOptions::new().line_mode(mode))?;
    let cwd = env::current_dir()?;
    print!("{}", render_report(&summary, &cwd));

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            match e.downcast_ref::<TypelocError>() {
                Some(TypelocError::NotADirectory(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
