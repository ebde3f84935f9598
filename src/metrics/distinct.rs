//! Distinct-n diversity metrics
//!
//! Per-sentence distinct-n: unique right-padded n-grams over the token
//! count; the corpus value is the mean of per-sentence scores, NOT a
//! type/token ratio over the pooled corpus. Downstream comparisons depend
//! on the per-sentence-average definition, so it is preserved exactly.
//!
//! Right padding means every token starts an n-gram (the last token's
//! n-gram is padded), so a sentence of all-unique tokens scores 1.0 for
//! every n.

use serde::Serialize;
use std::collections::HashSet;

/// Distinct-1/2/3 for one system's hypothesis corpus
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistinctScores {
    /// Mean per-sentence distinct-1
    pub distinct_1: f64,
    /// Mean per-sentence distinct-2
    pub distinct_2: f64,
    /// Mean per-sentence distinct-3
    pub distinct_3: f64,
}

impl DistinctScores {
    /// Scores in column order (distinct-1, distinct-2, distinct-3).
    #[must_use]
    pub fn as_array(&self) -> [f64; 3] {
        [self.distinct_1, self.distinct_2, self.distinct_3]
    }
}

/// Distinct-n of a single sentence; 0 when it has no tokens.
#[must_use]
pub fn sentence_distinct_n(sentence: &str, n: usize) -> f64 {
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut ngrams: HashSet<Vec<Option<&str>>> = HashSet::new();
    for start in 0..tokens.len() {
        let ngram: Vec<Option<&str>> = (0..n).map(|j| tokens.get(start + j).copied()).collect();
        ngrams.insert(ngram);
    }
    ngrams.len() as f64 / tokens.len() as f64
}

/// Mean per-sentence distinct-n over a corpus; 0 for an empty corpus.
#[must_use]
pub fn corpus_distinct_n(corpus: &[String], n: usize) -> f64 {
    if corpus.is_empty() {
        return 0.0;
    }
    let sum: f64 = corpus.iter().map(|s| sentence_distinct_n(s, n)).sum();
    sum / corpus.len() as f64
}

/// Distinct-1/2/3 over one system's hypotheses.
#[must_use]
pub fn distinct_scores(corpus: &[String]) -> DistinctScores {
    DistinctScores {
        distinct_1: corpus_distinct_n(corpus, 1),
        distinct_2: corpus_distinct_n(corpus, 2),
        distinct_3: corpus_distinct_n(corpus, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentence_is_zero() {
        assert_eq!(sentence_distinct_n("", 1), 0.0);
        assert_eq!(sentence_distinct_n("   ", 2), 0.0);
    }

    #[test]
    fn test_all_unique_tokens_distinct_1_is_one() {
        assert!((sentence_distinct_n("the cat sat", 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_tokens_lower_distinct_1() {
        // 2 unique over 4 tokens
        assert!((sentence_distinct_n("a b a b", 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_right_padding_counts_every_token_position() {
        // bigrams of "a b c": (a,b), (b,c), (c,_) -> 3 unique over 3 tokens
        assert!((sentence_distinct_n("a b c", 2) - 1.0).abs() < 1e-12);
        // bigrams of "a a a": (a,a), (a,a), (a,_) -> 2 unique over 3 tokens
        assert!((sentence_distinct_n("a a a", 2) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_corpus_is_mean_of_sentences() {
        let corpus = vec!["a b".to_string(), "a a".to_string()];
        // sentence scores: 1.0 and 0.5
        assert!((corpus_distinct_n(&corpus, 1) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_corpus_is_zero() {
        assert_eq!(corpus_distinct_n(&[], 3), 0.0);
    }

    #[test]
    fn test_scores_column_order() {
        let scores = distinct_scores(&["a b c".to_string()]);
        assert_eq!(
            scores.as_array(),
            [scores.distinct_1, scores.distinct_2, scores.distinct_3]
        );
    }
}
