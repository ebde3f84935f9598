//! Automatic evaluation metrics
//!
//! Corpus-level BLEU/deltaBLEU, multi-reference ROUGE recall and
//! distinct-n, orchestrated per system by [`MetricEngine`]. The BLEU and
//! ROUGE scorers sit behind traits so an external scoring capability can
//! be swapped in without touching the engine.

pub mod bleu;
pub mod distinct;
pub mod engine;
mod error;
pub mod rouge;
pub mod weights;

pub use bleu::NgramBleu;
pub use distinct::{corpus_distinct_n, distinct_scores, sentence_distinct_n, DistinctScores};
pub use engine::{BleuScorer, MetricEngine, RougeScorer, SystemScores};
pub use error::{MetricError, Result};
pub use rouge::{NgramRouge, RougeScores};
pub use weights::{build_ref_weights, WeightScheme, GLOBAL_REF_WEIGHTS};
