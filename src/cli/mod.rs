//! Command-line interface
//!
//! Argument types and command handlers for the `evaluar` binary.
//!
//! ```bash
//! evaluar report /data/corpus
//! evaluar report /data/corpus -o scores.csv
//! evaluar stats /data/dialogs
//! evaluar stats /data/multiwoz.json --format json
//! ```

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{log, LogLevel};

use crate::stats::CorpusFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Evaluar: dialogue-system evaluation toolkit
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(version)]
#[command(about = "Dialogue-system evaluation: metric reports and corpus statistics")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score every system against the references and write a CSV report
    Report(ReportArgs),

    /// Descriptive statistics over a raw dialogue corpus
    Stats(StatsArgs),
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Corpus root directory; prompted for interactively when omitted
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Report destination (default: <PATH>/output.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct StatsArgs {
    /// Corpus path; prompted for interactively when omitted
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Input format; inferred from the path when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// CLI spelling of [`CorpusFormat`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Ubuntu,
    Twitter,
    Json,
}

impl From<FormatArg> for CorpusFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ubuntu => CorpusFormat::Ubuntu,
            FormatArg::Twitter => CorpusFormat::Twitter,
            FormatArg::Json => CorpusFormat::Json,
        }
    }
}

/// Parse arguments from an iterator (testing hook).
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
