//! Human-rating file parsing
//!
//! Line grammar: a line that begins with `S_<int>` carries one utterance's
//! annotator scores as a bracketed comma-separated integer list, e.g.
//!
//! ```text
//! S_3  hyp: i can help with that  [4, 5, 3]
//! ```
//!
//! Anything else (headers, blank lines, commentary) is ignored. A matching
//! line with a malformed or empty list is skipped as well; text-format
//! fragility stays out of the aggregation logic.

use super::{CorpusError, Result, SystemId};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Per-utterance mean ratings per system, in rating-file line order.
pub type RatingTable = BTreeMap<SystemId, Vec<f64>>;

/// One parsed rating line: the system it rates and the annotators' scores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingLine {
    /// Rated system
    pub system: SystemId,
    /// Integer scores from the bracketed list
    pub scores: Vec<u32>,
}

impl RatingLine {
    /// Mean of the annotators' scores for this utterance.
    #[must_use]
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.scores.iter().map(|&s| f64::from(s)).sum();
        sum / self.scores.len() as f64
    }
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(S_\d+).*?\[([^\]]*)\]").expect("rating line pattern is valid")
    })
}

/// Parse one rating line into a typed record.
///
/// Returns `None` for lines that do not match the grammar or whose bracket
/// list holds no valid integers.
#[must_use]
pub fn parse_rating_line(line: &str) -> Option<RatingLine> {
    let caps = line_pattern().captures(line)?;
    let system = SystemId::from_prefix(caps.get(1)?.as_str())?;
    let scores: Vec<u32> = caps
        .get(2)?
        .as_str()
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(RatingLine { system, scores })
}

/// Scan a rating file and accumulate per-utterance means per system.
pub fn load_rating_table(path: &Path) -> Result<RatingTable> {
    if !path.is_file() {
        return Err(CorpusError::MissingData {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let mut table = RatingTable::new();
    for line in content.lines() {
        if let Some(record) = parse_rating_line(line) {
            table.entry(record.system).or_default().push(record.mean());
        }
    }
    Ok(table)
}

/// Corpus-level rating for one system: the mean of its per-utterance means.
#[must_use]
pub fn mean_rating(table: &RatingTable, system: SystemId) -> Option<f64> {
    let means = table.get(&system)?;
    if means.is_empty() {
        return None;
    }
    Some(means.iter().sum::<f64>() / means.len() as f64)
}
