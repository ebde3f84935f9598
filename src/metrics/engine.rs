//! Per-system metric orchestration
//!
//! Drives the four metric families (human rating, BLEU variants, ROUGE,
//! distinct-n) over every system in the hypothesis set. The engine only
//! builds correctly-shaped inputs; scoring policy lives in the injected
//! scorer strategies. Each family is computed independently: a failure in
//! one is recorded as an absent score and never suppresses the others.

use super::bleu::NgramBleu;
use super::distinct::distinct_scores;
use super::rouge::{NgramRouge, RougeScores};
use super::weights::{build_ref_weights, WeightScheme};
use super::Result;
use crate::corpus::{mean_rating, HypothesisSet, RatingTable, ReferenceSource, SystemId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Corpus-level BLEU capability consumed by the engine.
///
/// `references` is source-major; `ref_weights`, when present, mirrors its
/// shape. Implementations own tokenization and smoothing policy.
pub trait BleuScorer {
    fn corpus_bleu(
        &self,
        hypotheses: &[String],
        references: &[Vec<String>],
        ref_weights: Option<&[Vec<f64>]>,
    ) -> Result<f64>;
}

impl BleuScorer for NgramBleu {
    fn corpus_bleu(
        &self,
        hypotheses: &[String],
        references: &[Vec<String>],
        ref_weights: Option<&[Vec<f64>]>,
    ) -> Result<f64> {
        self.score(hypotheses, references, ref_weights)
    }
}

/// Corpus-level ROUGE capability consumed by the engine.
///
/// `references` is utterance-major: one list of reference texts per
/// hypothesis utterance.
pub trait RougeScorer {
    fn corpus_rouge(&self, hypotheses: &[String], references: &[Vec<String>])
        -> Result<RougeScores>;
}

impl RougeScorer for NgramRouge {
    fn corpus_rouge(
        &self,
        hypotheses: &[String],
        references: &[Vec<String>],
    ) -> Result<RougeScores> {
        self.score(hypotheses, references)
    }
}

/// All metric families for one system; `None` marks missing data or a
/// scoring failure confined to that family.
#[derive(Clone, Debug, Serialize)]
pub struct SystemScores {
    /// Mean human rating across rated utterances
    pub human_rating: Option<f64>,
    /// BLEU-4, deltaBLEU-4 uniform, deltaBLEU-4 global; each variant fails
    /// independently (the global table binds the reference-source count)
    pub bleu: [Option<f64>; 3],
    /// ROUGE-2 / ROUGE-L recall
    pub rouge: Option<RougeScores>,
    /// Distinct-1/2/3
    pub distinct: Option<[f64; 3]>,
}

/// Metric engine with injected scoring strategies.
pub struct MetricEngine<B = NgramBleu, R = NgramRouge> {
    bleu: B,
    rouge: R,
}

impl Default for MetricEngine {
    fn default() -> Self {
        Self {
            bleu: NgramBleu::default(),
            rouge: NgramRouge,
        }
    }
}

impl MetricEngine {
    /// Engine with the built-in n-gram scorers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BleuScorer, R: RougeScorer> MetricEngine<B, R> {
    /// Engine with caller-supplied scoring capabilities.
    pub fn with_scorers(bleu: B, rouge: R) -> Self {
        Self { bleu, rouge }
    }

    /// Score every system in the hypothesis set.
    ///
    /// The caller has already verified hypothesis/reference alignment;
    /// per-system and per-family failures degrade to `None` here rather
    /// than aborting the run.
    pub fn score_all(
        &self,
        hypotheses: &HypothesisSet,
        references: &[ReferenceSource],
        ratings: &RatingTable,
    ) -> BTreeMap<SystemId, SystemScores> {
        let n_utterances = references.first().map_or(0, |s| s.utterances.len());
        let source_major: Vec<Vec<String>> =
            references.iter().map(|s| s.utterances.clone()).collect();
        let utterance_major = transpose(&source_major, n_utterances);

        // One weight configuration per BLEU variant, shared across systems.
        // A variant whose weights cannot be built for this corpus (the
        // global table binds the source count) degrades to a missing value
        // without taking the other variants down.
        let weight_configs: Vec<Result<Option<Vec<Vec<f64>>>>> = [
            WeightScheme::Unweighted,
            WeightScheme::Uniform,
            WeightScheme::Global,
        ]
        .into_iter()
        .map(|scheme| build_ref_weights(scheme, references.len(), n_utterances))
        .collect();

        let mut results = BTreeMap::new();
        for (&system, corpus) in hypotheses {
            let scores = SystemScores {
                human_rating: mean_rating(ratings, system),
                bleu: self.score_bleu_variants(corpus, &source_major, &weight_configs),
                rouge: self.rouge.corpus_rouge(corpus, &utterance_major).ok(),
                distinct: Some(distinct_scores(corpus).as_array()),
            };
            results.insert(system, scores);
        }
        results
    }

    fn score_bleu_variants(
        &self,
        corpus: &[String],
        source_major: &[Vec<String>],
        configs: &[Result<Option<Vec<Vec<f64>>>>],
    ) -> [Option<f64>; 3] {
        let mut variants = [None; 3];
        for (slot, config) in variants.iter_mut().zip(configs) {
            *slot = config.as_ref().ok().and_then(|weights| {
                self.bleu
                    .corpus_bleu(corpus, source_major, weights.as_deref())
                    .ok()
            });
        }
        variants
    }
}

/// Source-major to utterance-major: `out[i]` is utterance `i`'s text
/// across all sources. A source shorter than `n_utterances` contributes
/// nothing past its end, so unverified shapes degrade instead of
/// panicking.
fn transpose(source_major: &[Vec<String>], n_utterances: usize) -> Vec<Vec<String>> {
    (0..n_utterances)
        .map(|i| {
            source_major
                .iter()
                .filter_map(|source| source.get(i).cloned())
                .collect()
        })
        .collect()
}
