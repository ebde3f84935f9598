//! CLI command implementations

mod report;
mod stats;

use crate::cli::{Cli, Command, LogLevel};
use std::io::Write;
use std::path::PathBuf;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Report(args) => report::run_report(args, log_level),
        Command::Stats(args) => stats::run_stats(args, log_level),
    }
}

/// Use the given path, or prompt for one on stdin when absent.
fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(path) = path {
        return Ok(path);
    }
    println!("please input the path of the corpus");
    print!("input:");
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("no corpus path given".to_string());
    }
    Ok(PathBuf::from(trimmed))
}
