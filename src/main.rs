//! Evaluar CLI
//!
//! Entry point for the dialogue-system evaluation toolkit.
//!
//! # Usage
//!
//! ```bash
//! # Score every system and write <corpus>/output.csv
//! evaluar report /data/dialogue_corpus
//!
//! # Same, with an explicit output path
//! evaluar report /data/dialogue_corpus -o scores.csv
//!
//! # Descriptive statistics over a raw corpus
//! evaluar stats /data/ubuntu_dialogs
//! evaluar stats /data/multiwoz.json
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
