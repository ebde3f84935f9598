//! Corpus-level BLEU with optional reference weights
//!
//! Implements BLEU (Papineni et al., 2002) accumulated over a corpus with
//! modified n-gram precision and brevity penalty, extended with the
//! deltaBLEU reference weighting of Galley et al. (2015): each reference
//! source carries a per-utterance weight, a hypothesis n-gram earns
//! `max_r(w_r * clipped_count_r)` credit across sources, and the
//! denominator scales by `max_r(w_r)`. With every weight at 1 this reduces
//! exactly to standard clipped counts. Scores are in [0, 1].

use super::{MetricError, Result};
use std::collections::BTreeMap;

/// Default maximum n-gram order (BLEU-4)
pub const DEFAULT_MAX_N: usize = 4;

/// Corpus BLEU scorer over whitespace tokens.
#[derive(Clone, Copy, Debug)]
pub struct NgramBleu {
    /// Maximum n-gram order
    pub max_n: usize,
}

impl Default for NgramBleu {
    fn default() -> Self {
        Self { max_n: DEFAULT_MAX_N }
    }
}

impl NgramBleu {
    /// Score a hypothesis corpus against multi-source references.
    ///
    /// `references` is source-major: `references[s][i]` is source `s`'s
    /// text for utterance `i`. `ref_weights`, when present, must mirror
    /// that shape exactly.
    pub fn score(
        &self,
        hypotheses: &[String],
        references: &[Vec<String>],
        ref_weights: Option<&[Vec<f64>]>,
    ) -> Result<f64> {
        if hypotheses.is_empty() {
            return Err(MetricError::EmptyCorpus);
        }
        if references.is_empty() {
            return Err(MetricError::ScoringFailure {
                metric: "bleu".into(),
                message: "no reference sources".into(),
            });
        }
        check_shape("references", hypotheses.len(), references)?;
        if let Some(weights) = ref_weights {
            if weights.len() != references.len() {
                return Err(MetricError::ShapeMismatch {
                    source_id: "ref_weights".into(),
                    expected: references.len(),
                    actual: weights.len(),
                });
            }
            check_shape("ref_weights", hypotheses.len(), weights)?;
        }

        let mut numerators = vec![0.0f64; self.max_n];
        let mut denominators = vec![0.0f64; self.max_n];
        let mut hyp_len = 0usize;
        let mut ref_len = 0usize;

        for (i, hypothesis) in hypotheses.iter().enumerate() {
            let hyp_tokens: Vec<&str> = hypothesis.split_whitespace().collect();
            let ref_token_lists: Vec<Vec<&str>> = references
                .iter()
                .map(|source| source[i].split_whitespace().collect())
                .collect();

            hyp_len += hyp_tokens.len();
            ref_len += closest_ref_len(&ref_token_lists, hyp_tokens.len());

            // Weight of source s at utterance i; 1 when unweighted.
            let weight_at = |s: usize| ref_weights.map_or(1.0, |w| w[s][i]);
            let max_weight = (0..references.len())
                .map(weight_at)
                .fold(f64::NEG_INFINITY, f64::max);

            for n in 1..=self.max_n {
                let hyp_ngrams = extract_ngrams(&hyp_tokens, n);
                let ref_ngram_lists: Vec<BTreeMap<Vec<&str>, usize>> = ref_token_lists
                    .iter()
                    .map(|tokens| extract_ngrams(tokens, n))
                    .collect();

                for (ngram, &hyp_count) in &hyp_ngrams {
                    let credit = ref_ngram_lists
                        .iter()
                        .enumerate()
                        .map(|(s, ref_ngrams)| {
                            let clipped = hyp_count.min(ref_ngrams.get(ngram).copied().unwrap_or(0));
                            weight_at(s) * clipped as f64
                        })
                        .fold(0.0f64, f64::max);
                    numerators[n - 1] += credit;
                    denominators[n - 1] += max_weight * hyp_count as f64;
                }
            }
        }

        if hyp_len == 0 {
            return Ok(0.0);
        }

        // Geometric mean of precisions; any zero order zeroes the score.
        let mut log_precision_sum = 0.0;
        for n in 0..self.max_n {
            if denominators[n] <= 0.0 || numerators[n] <= 0.0 {
                return Ok(0.0);
            }
            log_precision_sum += (numerators[n] / denominators[n]).ln();
        }
        let avg_log_precision = log_precision_sum / self.max_n as f64;

        let bp = if hyp_len >= ref_len {
            1.0
        } else {
            (1.0 - ref_len as f64 / hyp_len as f64).exp()
        };

        Ok(bp * avg_log_precision.exp())
    }
}

fn check_shape<T>(what: &str, expected: usize, per_source: &[Vec<T>]) -> Result<()> {
    for (s, items) in per_source.iter().enumerate() {
        if items.len() != expected {
            return Err(MetricError::ShapeMismatch {
                source_id: format!("{what}[{s}]"),
                expected,
                actual: items.len(),
            });
        }
    }
    Ok(())
}

/// Reference length closest to the hypothesis length (shorter wins ties).
fn closest_ref_len(ref_token_lists: &[Vec<&str>], hyp_len: usize) -> usize {
    ref_token_lists
        .iter()
        .map(Vec::len)
        .min_by_key(|&len| ((len as isize - hyp_len as isize).unsigned_abs(), len))
        .unwrap_or(0)
}

/// Extract n-grams from a token sequence and count occurrences.
///
/// Ordered map: credits are accumulated in n-gram iteration order, and
/// f64 summation order must not vary between runs over the same corpus.
pub(crate) fn extract_ngrams<'a>(tokens: &[&'a str], n: usize) -> BTreeMap<Vec<&'a str>, usize> {
    let mut counts = BTreeMap::new();
    if tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }
    counts
}
