//! Report command implementation
//!
//! Runs the full evaluation pipeline: load hypotheses, references and
//! ratings, verify positional alignment, score every system, assemble and
//! write the CSV report. Per-system gaps become `nan` cells; corpus-wide
//! problems (bad path, shape mismatch) abort with a descriptive message.

use super::resolve_path;
use crate::cli::logging::log;
use crate::cli::{LogLevel, ReportArgs};
use crate::corpus::{
    load_hypotheses, load_rating_table, load_references, verify_alignment, CorpusLayout,
};
use crate::metrics::MetricEngine;
use crate::report::Report;

pub fn run_report(args: ReportArgs, level: LogLevel) -> Result<(), String> {
    let root = resolve_path(args.path)?;
    let layout = CorpusLayout::new(root);
    layout.check_root().map_err(|e| e.to_string())?;

    let ratings = load_rating_table(&layout.rating_file()).map_err(|e| e.to_string())?;
    let hypotheses = load_hypotheses(&layout.hypotheses_dir()).map_err(|e| e.to_string())?;
    let references = load_references(&layout.references_dir()).map_err(|e| e.to_string())?;
    let n_utterances = verify_alignment(&hypotheses, &references).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Loaded {} hypothesis systems, {} reference sources, {} rated systems, {} utterances",
            hypotheses.len(),
            references.len(),
            ratings.len(),
            n_utterances
        ),
    );

    let scores = MetricEngine::new().score_all(&hypotheses, &references, &ratings);
    let report = Report::assemble(&ratings, &scores);

    let output = args.output.unwrap_or_else(|| layout.default_output());
    report.write(&output).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {} system rows to {}", report.rows.len(), output.display()),
    );
    Ok(())
}
