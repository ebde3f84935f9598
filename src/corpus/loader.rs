//! Hypothesis and reference loading
//!
//! One text file per system/source, one utterance per line. Line order is
//! the alignment key across hypotheses, references and ratings, so files
//! are read sequentially and never reordered.

use super::{read_lines, CorpusError, Result, SystemId};
use std::collections::BTreeMap;
use std::path::Path;

/// Hypotheses per system, keyed by system id (ascending).
///
/// A system absent from the directory is simply absent from the map; the
/// caller reports `nan` for it rather than failing the run.
pub type HypothesisSet = BTreeMap<SystemId, Vec<String>>;

/// One reference source: the original reference or a regenerated variant.
#[derive(Clone, Debug)]
pub struct ReferenceSource {
    /// File stem, e.g. `original_refs` or `refgen_result4`
    pub id: String,
    /// Utterances in input order
    pub utterances: Vec<String>,
}

/// Load every `S_<int>*.txt` hypothesis file under `dir`.
pub fn load_hypotheses(dir: &Path) -> Result<HypothesisSet> {
    if !dir.is_dir() {
        return Err(CorpusError::MissingData {
            path: dir.to_path_buf(),
        });
    }

    let mut hypotheses = HypothesisSet::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".txt") {
            continue;
        }
        if let Some(id) = SystemId::from_prefix(name) {
            hypotheses.insert(id, read_lines(&path)?);
        }
    }
    Ok(hypotheses)
}

/// Load every `*.txt` reference source under `dir`, in deterministic order:
/// unnumbered stems (the original reference) first, then numbered
/// regenerated variants by ascending trailing integer.
pub fn load_references(dir: &Path) -> Result<Vec<ReferenceSource>> {
    if !dir.is_dir() {
        return Err(CorpusError::MissingData {
            path: dir.to_path_buf(),
        });
    }

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = name.strip_suffix(".txt") else {
            continue;
        };
        sources.push(ReferenceSource {
            id: stem.to_string(),
            utterances: read_lines(&path)?,
        });
    }

    sources.sort_by(|a, b| {
        source_rank(&a.id)
            .cmp(&source_rank(&b.id))
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(sources)
}

/// Sort key: (has-number, number). `original_refs` ranks before
/// `refgen_result1`, which ranks before `refgen_result10`.
fn source_rank(stem: &str) -> (bool, u64) {
    let digits: String = stem
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    match digits.parse::<u64>() {
        Ok(n) => (true, n),
        Err(_) => (false, 0),
    }
}

/// Verify that every reference source and every hypothesis set carries the
/// same utterance count. Must pass before any weight building or BLEU
/// scoring; a mismatch names the offending source.
pub fn verify_alignment(hypotheses: &HypothesisSet, references: &[ReferenceSource]) -> Result<usize> {
    let expected = references.first().map_or(0, |s| s.utterances.len());

    for source in references {
        if source.utterances.len() != expected {
            return Err(CorpusError::ShapeMismatch {
                source_id: source.id.clone(),
                expected,
                actual: source.utterances.len(),
            });
        }
    }
    for (id, utterances) in hypotheses {
        if utterances.len() != expected {
            return Err(CorpusError::ShapeMismatch {
                source_id: id.to_string(),
                expected,
                actual: utterances.len(),
            });
        }
    }
    Ok(expected)
}
