//! Stats command implementation

use super::resolve_path;
use crate::cli::logging::log;
use crate::cli::{LogLevel, StatsArgs};
use crate::stats::{collect, CorpusFormat};

pub fn run_stats(args: StatsArgs, level: LogLevel) -> Result<(), String> {
    let path = resolve_path(args.path)?;
    let format = args
        .format
        .map_or_else(|| CorpusFormat::infer(&path), CorpusFormat::from);

    let stats = collect(&path, format).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "For the {}\n \
             Number of utterances: {}\n \
             average utterance length (in tokens): {}\n \
             number of tokens: {}\n \
             number of unique utterances: {}\n \
             number of unique tokens: {}",
            format.label(),
            stats.total_utterances,
            stats.average_utterance_len(),
            stats.total_tokens,
            stats.unique_utterances.len(),
            stats.unique_tokens.len()
        ),
    );

    if let Some(summary) = stats.dialogue_summary() {
        log(
            level,
            LogLevel::Verbose,
            &format!(
                "Dialogues: {} (utterances per dialogue: mean {:.2}, std {:.2})",
                stats.dialogue_sizes.len(),
                summary.mean,
                summary.std
            ),
        );
    }
    Ok(())
}
