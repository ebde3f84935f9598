//! Multi-reference ROUGE-2 / ROUGE-L recall
//!
//! N-gram overlap and longest-common-subsequence recall against several
//! reference texts per utterance: recall is computed against each
//! reference, averaged across references, then averaged across utterances.
//! Scores are in [0, 1].

use super::bleu::extract_ngrams;
use super::{MetricError, Result};
use serde::Serialize;

/// Recall scores for the two ROUGE variants the report carries
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RougeScores {
    /// ROUGE-2 (bigram) recall
    pub rouge_2: f64,
    /// ROUGE-L (longest common subsequence) recall
    pub rouge_l: f64,
}

/// ROUGE scorer over whitespace tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct NgramRouge;

impl NgramRouge {
    /// Score a hypothesis corpus against per-utterance reference lists.
    ///
    /// `references` is utterance-major: `references[i]` holds utterance
    /// `i`'s text across all reference sources.
    pub fn score(&self, hypotheses: &[String], references: &[Vec<String>]) -> Result<RougeScores> {
        if hypotheses.is_empty() {
            return Err(MetricError::EmptyCorpus);
        }
        if references.len() != hypotheses.len() {
            return Err(MetricError::ShapeMismatch {
                source_id: "rouge references".into(),
                expected: hypotheses.len(),
                actual: references.len(),
            });
        }
        if references.iter().any(Vec::is_empty) {
            return Err(MetricError::ScoringFailure {
                metric: "rouge".into(),
                message: "an utterance has no references".into(),
            });
        }

        let mut rouge_2_sum = 0.0;
        let mut rouge_l_sum = 0.0;
        for (hypothesis, refs) in hypotheses.iter().zip(references) {
            rouge_2_sum += mean_over_refs(hypothesis, refs, |h, r| ngram_recall(r, h, 2));
            rouge_l_sum += mean_over_refs(hypothesis, refs, |h, r| lcs_recall(r, h));
        }

        let n = hypotheses.len() as f64;
        Ok(RougeScores {
            rouge_2: rouge_2_sum / n,
            rouge_l: rouge_l_sum / n,
        })
    }
}

fn mean_over_refs(hypothesis: &str, refs: &[String], recall: impl Fn(&str, &str) -> f64) -> f64 {
    let sum: f64 = refs.iter().map(|r| recall(hypothesis, r)).sum();
    sum / refs.len() as f64
}

/// N-gram recall: clipped overlap over the reference's n-gram total.
fn ngram_recall(reference: &str, hypothesis: &str, n: usize) -> f64 {
    let ref_tokens: Vec<&str> = reference.split_whitespace().collect();
    let hyp_tokens: Vec<&str> = hypothesis.split_whitespace().collect();
    if ref_tokens.len() < n || hyp_tokens.len() < n {
        return 0.0;
    }

    let ref_ngrams = extract_ngrams(&ref_tokens, n);
    let hyp_ngrams = extract_ngrams(&hyp_tokens, n);

    let mut overlap = 0usize;
    for (ngram, &hyp_count) in &hyp_ngrams {
        let ref_count = ref_ngrams.get(ngram).copied().unwrap_or(0);
        overlap += hyp_count.min(ref_count);
    }

    let ref_total: usize = ref_ngrams.values().sum();
    if ref_total == 0 {
        return 0.0;
    }
    overlap as f64 / ref_total as f64
}

/// LCS recall: longest common subsequence over the reference length.
fn lcs_recall(reference: &str, hypothesis: &str) -> f64 {
    let ref_tokens: Vec<&str> = reference.split_whitespace().collect();
    let hyp_tokens: Vec<&str> = hypothesis.split_whitespace().collect();
    if ref_tokens.is_empty() || hyp_tokens.is_empty() {
        return 0.0;
    }
    lcs_length(&ref_tokens, &hyp_tokens) as f64 / ref_tokens.len() as f64
}

/// Compute length of longest common subsequence.
fn lcs_length(a: &[&str], b: &[&str]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp[n][m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_identical_single_reference() {
        let hyp = lines(&["the cat sat on the mat"]);
        let refs = vec![lines(&["the cat sat on the mat"])];
        let scores = NgramRouge.score(&hyp, &refs).expect("score");
        assert!((scores.rouge_2 - 1.0).abs() < 1e-12);
        assert!((scores.rouge_l - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_scores_zero() {
        let hyp = lines(&["aa bb cc"]);
        let refs = vec![lines(&["xx yy zz"])];
        let scores = NgramRouge.score(&hyp, &refs).expect("score");
        assert_eq!(scores.rouge_2, 0.0);
        assert_eq!(scores.rouge_l, 0.0);
    }

    #[test]
    fn test_recall_averages_over_references() {
        // Perfect against one source, disjoint against the other.
        let hyp = lines(&["aa bb cc"]);
        let refs = vec![lines(&["aa bb cc", "xx yy zz"])];
        let scores = NgramRouge.score(&hyp, &refs).expect("score");
        assert!((scores.rouge_2 - 0.5).abs() < 1e-12);
        assert!((scores.rouge_l - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lcs_recall_partial() {
        // LCS("the cat sat", "the dog sat") = 2, ref len 3.
        let hyp = lines(&["the dog sat"]);
        let refs = vec![lines(&["the cat sat"])];
        let scores = NgramRouge.score(&hyp, &refs).expect("score");
        assert!((scores.rouge_l - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let hyp = lines(&["one", "two"]);
        let refs = vec![lines(&["one"])];
        let err = NgramRouge.score(&hyp, &refs).unwrap_err();
        assert!(matches!(err, MetricError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_empty_reference_list_is_scoring_failure() {
        let hyp = lines(&["one"]);
        let refs = vec![Vec::new()];
        let err = NgramRouge.score(&hyp, &refs).unwrap_err();
        assert!(matches!(err, MetricError::ScoringFailure { .. }));
    }
}
