//! Dialogue evaluation corpus model
//!
//! A corpus is a directory with per-system hypothesis files, a directory of
//! reference sources, and one human-rating file. Everything is built fresh
//! per run and read-only afterwards; line order is preserved end to end
//! because hypothesis, reference and rating rows are positionally aligned
//! by utterance index.

mod error;
mod loader;
mod rating;

pub use error::{CorpusError, Result};
pub use loader::{load_hypotheses, load_references, verify_alignment, HypothesisSet, ReferenceSource};
pub use rating::{load_rating_table, mean_rating, parse_rating_line, RatingLine, RatingTable};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Identifier of one candidate dialogue-generation system (`S_<n>`).
///
/// Ordered numerically, so `S_2 < S_10` (report rows sort this way).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemId(pub u32);

impl SystemId {
    /// Parse a leading `S_<int>` token, ignoring anything after it.
    ///
    /// This is the filename/rating-line grammar: `S_3_baseline.txt` and
    /// `S_3 [1,2]` both identify system 3. Returns `None` when the text
    /// does not start with the pattern.
    #[must_use]
    pub fn from_prefix(text: &str) -> Option<Self> {
        let rest = text.strip_prefix("S_")?;
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok().map(SystemId)
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S_{}", self.0)
    }
}

impl FromStr for SystemId {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s.strip_prefix("S_").ok_or_else(|| CorpusError::MalformedInput {
            context: "system id".into(),
            message: format!("expected S_<int>, got {s:?}"),
        })?;
        rest.parse()
            .map(SystemId)
            .map_err(|_| CorpusError::MalformedInput {
                context: "system id".into(),
                message: format!("expected S_<int>, got {s:?}"),
            })
    }
}

/// On-disk layout of an evaluation corpus, relative to its root.
#[derive(Clone, Debug)]
pub struct CorpusLayout {
    /// Corpus root directory
    pub root: PathBuf,
}

impl CorpusLayout {
    /// Layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory of per-system hypothesis files
    #[must_use]
    pub fn hypotheses_dir(&self) -> PathBuf {
        self.root.join("hypotheses")
    }

    /// Directory of reference-source files
    #[must_use]
    pub fn references_dir(&self) -> PathBuf {
        self.root.join("references")
    }

    /// Human-rating score file
    #[must_use]
    pub fn rating_file(&self) -> PathBuf {
        self.root.join("human_rating_scores.txt")
    }

    /// Default report destination
    #[must_use]
    pub fn default_output(&self) -> PathBuf {
        self.root.join("output.csv")
    }

    /// Fail early when the corpus root is not a directory.
    pub fn check_root(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(CorpusError::MissingData {
                path: self.root.clone(),
            })
        }
    }
}

/// Read a text file into one string per line, newline stripped, order kept.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}
