//! Property tests for the evaluation metrics
//!
//! Ensures metric invariants hold over generated inputs:
//! - Weight vectors always match the utterance count
//! - Scores bounded to [0, 1], never NaN
//! - Distinct-n edge cases

use evaluar::metrics::{
    build_ref_weights, corpus_distinct_n, sentence_distinct_n, NgramBleu, NgramRouge,
    WeightScheme, GLOBAL_REF_WEIGHTS,
};
use evaluar::stats::{normalize, summarize};
use proptest::collection::vec;
use proptest::prelude::*;

/// A sentence of 1..=8 lowercase tokens from a small vocabulary.
fn sentence() -> impl Strategy<Value = String> {
    vec("[a-f]{1,3}", 1..=8).prop_map(|tokens| tokens.join(" "))
}

/// A corpus of 1..=6 sentences.
fn corpus() -> impl Strategy<Value = Vec<String>> {
    vec(sentence(), 1..=6)
}

proptest! {
    // ── Reference weights ────────────────────────────────────────────

    #[test]
    fn prop_weight_vectors_match_utterance_count(
        n_utterances in 1usize..200,
        n_sources in 1usize..20
    ) {
        for (scheme, sources) in [
            (WeightScheme::Unweighted, n_sources),
            (WeightScheme::Uniform, n_sources),
            (WeightScheme::Global, GLOBAL_REF_WEIGHTS.len()),
        ] {
            let weights = build_ref_weights(scheme, sources, n_utterances)
                .expect("valid shape must build");
            if let Some(weights) = weights {
                prop_assert_eq!(weights.len(), sources);
                for vector in &weights {
                    prop_assert_eq!(vector.len(), n_utterances);
                }
            } else {
                prop_assert_eq!(scheme, WeightScheme::Unweighted);
            }
        }
    }

    // ── Distinct-n ───────────────────────────────────────────────────

    #[test]
    fn prop_distinct_n_bounded(s in sentence(), n in 1usize..=4) {
        let d = sentence_distinct_n(&s, n);
        prop_assert!((0.0..=1.0).contains(&d), "distinct-{n} {d} out of range for {s:?}");
        prop_assert!(!d.is_nan());
    }

    #[test]
    fn prop_distinct_1_of_unique_tokens_is_one(len in 1usize..=10) {
        // Construct pairwise-distinct tokens.
        let s: Vec<String> = (0..len).map(|i| format!("tok{i}")).collect();
        let d = sentence_distinct_n(&s.join(" "), 1);
        prop_assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_corpus_distinct_is_mean_of_sentences(c in corpus(), n in 1usize..=3) {
        let expected: f64 =
            c.iter().map(|s| sentence_distinct_n(s, n)).sum::<f64>() / c.len() as f64;
        prop_assert!((corpus_distinct_n(&c, n) - expected).abs() < 1e-12);
    }

    // ── BLEU ─────────────────────────────────────────────────────────

    #[test]
    fn prop_bleu_bounded(hyp in corpus(), seed in corpus()) {
        // Align the reference source to the hypothesis length.
        let refs: Vec<String> = hyp
            .iter()
            .enumerate()
            .map(|(i, _)| seed[i % seed.len()].clone())
            .collect();
        let score = NgramBleu::default()
            .score(&hyp, &[refs], None)
            .expect("aligned corpus must score");
        prop_assert!((0.0..=1.0).contains(&score), "BLEU {score} out of range");
        prop_assert!(!score.is_nan());
    }

    #[test]
    fn prop_bleu_uniform_weights_equal_unweighted(hyp in corpus()) {
        let refs = vec![hyp.clone()];
        let uniform = vec![vec![1.0; hyp.len()]];
        let scorer = NgramBleu::default();
        let plain = scorer.score(&hyp, &refs, None).expect("score");
        let weighted = scorer.score(&hyp, &refs, Some(&uniform)).expect("score");
        prop_assert!((plain - weighted).abs() < 1e-12);
    }

    // ── ROUGE ────────────────────────────────────────────────────────

    #[test]
    fn prop_rouge_recall_bounded(hyp in corpus(), seed in corpus()) {
        let refs: Vec<Vec<String>> = hyp
            .iter()
            .enumerate()
            .map(|(i, _)| vec![seed[i % seed.len()].clone()])
            .collect();
        let scores = NgramRouge.score(&hyp, &refs).expect("aligned corpus must score");
        prop_assert!((0.0..=1.0).contains(&scores.rouge_2));
        prop_assert!((0.0..=1.0).contains(&scores.rouge_l));
    }

    #[test]
    fn prop_rouge_identical_lcs_recall_is_one(hyp in corpus()) {
        let refs: Vec<Vec<String>> = hyp.iter().map(|s| vec![s.clone()]).collect();
        let scores = NgramRouge.score(&hyp, &refs).expect("score");
        prop_assert!((scores.rouge_l - 1.0).abs() < 1e-12);
    }

    // ── Normalizer & summary ─────────────────────────────────────────

    #[test]
    fn prop_normalize_output_is_lowercase_unpunctuated(s in "[ -~]{0,40}") {
        for token in normalize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| !c.is_ascii_uppercase()));
            prop_assert!(token.chars().all(|c| !c.is_ascii_whitespace()));
        }
    }

    #[test]
    fn prop_summary_mean_within_bounds(values in vec(0u64..1000, 1..50)) {
        let s = summarize(&values).expect("non-empty");
        let min = *values.iter().min().expect("non-empty") as f64;
        let max = *values.iter().max().expect("non-empty") as f64;
        prop_assert!(s.mean >= min && s.mean <= max);
        prop_assert!(s.std >= 0.0);
    }
}
