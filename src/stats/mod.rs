//! Corpus-statistics mode
//!
//! Descriptive statistics over raw dialogue corpora: utterance and token
//! totals, uniqueness, average utterance length, and per-dialogue counts.
//! Three input formats are supported:
//!
//! - **Ubuntu**: a directory tree of `.tsv` files, column 4 = utterance
//! - **Twitter**: a single tab-separated conversation log, column 2 =
//!   utterance, conversations separated by near-empty lines
//! - **Json**: a JSON mapping of dialogue id to a list of turns with
//!   optional `sys`/`usr` text fields
//!
//! Uniqueness is tracked with explicit presence sets: the first occurrence
//! of an utterance or token marks it seen, later occurrences change
//! nothing. These are not frequency counters.

pub mod normalize;
pub mod summary;

pub use normalize::normalize;
pub use summary::{summarize, SummaryStats};

use crate::corpus::{CorpusError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

/// Corpus input format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorpusFormat {
    /// Directory tree of Ubuntu `.tsv` dialogue files
    Ubuntu,
    /// Single tab-separated Twitter conversation log
    Twitter,
    /// JSON dialogue map
    Json,
}

impl CorpusFormat {
    /// Infer the format from the input path: `.json` files are Json,
    /// `.out` logs are Twitter, directories are Ubuntu.
    #[must_use]
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            Some("out") => Self::Twitter,
            _ => Self::Ubuntu,
        }
    }

    /// Human-readable corpus label used in the printed summary.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ubuntu => "Ubuntu corpus",
            Self::Twitter => "Twitter corpus",
            Self::Json => "Json corpus",
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated corpus statistics
#[derive(Debug, Default)]
pub struct CorpusStats {
    /// Total utterance count
    pub total_utterances: u64,
    /// Total normalized-token count
    pub total_tokens: u64,
    /// Presence set of raw utterances
    pub unique_utterances: HashSet<String>,
    /// Presence set of normalized tokens
    pub unique_tokens: HashSet<String>,
    /// Utterances per dialogue unit (file, conversation or dialogue id)
    pub dialogue_sizes: Vec<u64>,
}

impl CorpusStats {
    /// Count one utterance: totals, presence sets, token stream.
    pub fn record(&mut self, utterance: &str) {
        self.total_utterances += 1;
        if !self.unique_utterances.contains(utterance) {
            self.unique_utterances.insert(utterance.to_string());
        }
        let tokens = normalize(utterance);
        self.total_tokens += tokens.len() as u64;
        for token in tokens {
            self.unique_tokens.insert(token);
        }
    }

    /// Mean utterance length in tokens; 0 for an empty corpus.
    #[must_use]
    pub fn average_utterance_len(&self) -> f64 {
        if self.total_utterances == 0 {
            return 0.0;
        }
        self.total_tokens as f64 / self.total_utterances as f64
    }

    /// Mean/std of per-dialogue utterance counts.
    #[must_use]
    pub fn dialogue_summary(&self) -> Option<SummaryStats> {
        summarize(&self.dialogue_sizes)
    }
}

/// One dialogue turn in the JSON corpus format.
///
/// Unknown fields are common (dialogue acts, spans) and ignored; a turn
/// with neither `sys` nor `usr` is skipped, not an error.
#[derive(Debug, Deserialize)]
pub struct Turn {
    #[serde(default)]
    pub sys: Option<String>,
    #[serde(default)]
    pub usr: Option<String>,
}

/// Collect statistics for a corpus at `path` in the given format.
pub fn collect(path: &Path, format: CorpusFormat) -> Result<CorpusStats> {
    match format {
        CorpusFormat::Ubuntu => scan_ubuntu(path),
        CorpusFormat::Twitter => scan_twitter(path),
        CorpusFormat::Json => scan_json(path),
    }
}

/// Walk a directory tree and count every `.tsv` dialogue file.
pub fn scan_ubuntu(root: &Path) -> Result<CorpusStats> {
    if !root.is_dir() {
        return Err(CorpusError::MissingData {
            path: root.to_path_buf(),
        });
    }
    let mut stats = CorpusStats::default();
    scan_ubuntu_dir(root, &mut stats)?;
    Ok(stats)
}

fn scan_ubuntu_dir(dir: &Path, stats: &mut CorpusStats) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_ubuntu_dir(&path, stats)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("tsv") {
            let before = stats.total_utterances;
            let content = std::fs::read_to_string(&path)?;
            for line in content.lines() {
                // Column 4 is the utterance; shorter rows are malformed
                // and skipped.
                if let Some(utterance) = line.split('\t').nth(3) {
                    stats.record(utterance);
                }
            }
            stats.dialogue_sizes.push(stats.total_utterances - before);
        }
    }
    Ok(())
}

/// Count a single tab-separated conversation log.
pub fn scan_twitter(file: &Path) -> Result<CorpusStats> {
    if !file.is_file() {
        return Err(CorpusError::MissingData {
            path: file.to_path_buf(),
        });
    }
    let mut stats = CorpusStats::default();
    let mut in_conversation = 0u64;
    let content = std::fs::read_to_string(file)?;
    for line in content.lines() {
        match line.split('\t').nth(1) {
            Some(utterance) => {
                stats.record(utterance);
                in_conversation += 1;
            }
            // A line without a second column separates conversations.
            None => {
                if in_conversation > 0 {
                    stats.dialogue_sizes.push(in_conversation);
                    in_conversation = 0;
                }
            }
        }
    }
    if in_conversation > 0 {
        stats.dialogue_sizes.push(in_conversation);
    }
    Ok(stats)
}

/// Count a JSON dialogue map.
pub fn scan_json(file: &Path) -> Result<CorpusStats> {
    if !file.is_file() {
        return Err(CorpusError::MissingData {
            path: file.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(file)?;
    let dialogues: BTreeMap<String, Vec<Turn>> = serde_json::from_str(&content)?;

    let mut stats = CorpusStats::default();
    for turns in dialogues.values() {
        let before = stats.total_utterances;
        for turn in turns {
            for utterance in [&turn.sys, &turn.usr].into_iter().flatten() {
                if !utterance.is_empty() {
                    stats.record(utterance);
                }
            }
        }
        stats.dialogue_sizes.push(stats.total_utterances - before);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_record_presence_sets_not_counters() {
        let mut stats = CorpusStats::default();
        stats.record("Hello there!");
        stats.record("Hello there!");
        stats.record("bye");

        assert_eq!(stats.total_utterances, 3);
        assert_eq!(stats.unique_utterances.len(), 2);
        // hello, there, hello, there, bye
        assert_eq!(stats.total_tokens, 5);
        assert_eq!(stats.unique_tokens.len(), 3);
        assert!((stats.average_utterance_len() - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_scan_ubuntu_tree() {
        let dir = tempfile::tempdir().expect("tempdir should succeed");
        let sub = dir.path().join("2008");
        std::fs::create_dir(&sub).expect("mkdir should succeed");
        let mut f = std::fs::File::create(sub.join("1.tsv")).expect("create should succeed");
        writeln!(f, "t1\tu1\tu2\thello world").expect("write should succeed");
        writeln!(f, "t2\tu2\tu1\thow are you").expect("write should succeed");
        writeln!(f, "malformed line").expect("write should succeed");
        let mut g = std::fs::File::create(sub.join("2.tsv")).expect("create should succeed");
        writeln!(g, "t1\tu1\tu2\thello world").expect("write should succeed");
        std::fs::File::create(sub.join("skip.log")).expect("create should succeed");

        let stats = scan_ubuntu(dir.path()).expect("scan should succeed");
        assert_eq!(stats.total_utterances, 3);
        assert_eq!(stats.unique_utterances.len(), 2);
        assert_eq!(stats.total_tokens, 7);
        let mut sizes = stats.dialogue_sizes.clone();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn test_scan_twitter_conversations() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file creation should succeed");
        writeln!(file, "1\tfirst reply").expect("write should succeed");
        writeln!(file, "2\tsecond reply").expect("write should succeed");
        writeln!(file).expect("write should succeed");
        writeln!(file, "1\tanother conversation").expect("write should succeed");

        let stats = scan_twitter(file.path()).expect("scan should succeed");
        assert_eq!(stats.total_utterances, 3);
        assert_eq!(stats.dialogue_sizes, vec![2, 1]);
    }

    #[test]
    fn test_scan_json_dialogues() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file creation should succeed");
        write!(
            file,
            r#"{{
  "dlg1": [{{"sys": "hi there", "usr": "hello"}}, {{"usr": ""}}],
  "dlg2": [{{"sys": "good bye", "meta": 3}}]
}}"#
        )
        .expect("write should succeed");

        let stats = scan_json(file.path()).expect("scan should succeed");
        assert_eq!(stats.total_utterances, 3);
        assert_eq!(stats.total_tokens, 5);
        let mut sizes = stats.dialogue_sizes.clone();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn test_scan_json_rejects_non_map() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file creation should succeed");
        write!(file, "[1, 2, 3]").expect("write should succeed");
        let err = scan_json(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Json(_)));
    }

    #[test]
    fn test_format_inference() {
        assert_eq!(CorpusFormat::infer(Path::new("corpus.json")), CorpusFormat::Json);
        assert_eq!(
            CorpusFormat::infer(Path::new("conversations.out")),
            CorpusFormat::Twitter
        );
        assert_eq!(CorpusFormat::infer(Path::new("dialogs")), CorpusFormat::Ubuntu);
    }

    #[test]
    fn test_missing_inputs() {
        assert!(matches!(
            scan_ubuntu(Path::new("/no/such/tree")).unwrap_err(),
            CorpusError::MissingData { .. }
        ));
        assert!(matches!(
            scan_twitter(Path::new("/no/such/file.out")).unwrap_err(),
            CorpusError::MissingData { .. }
        ));
    }
}
