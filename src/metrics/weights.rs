//! Reference weight vectors for deltaBLEU
//!
//! deltaBLEU scores a hypothesis against every reference source, giving
//! each source a per-utterance weight. Three schemes are supported:
//! unweighted (the scorer treats all references equally), uniform (an
//! explicit 1 everywhere) and global (one fixed scalar per source,
//! replicated across utterance positions).

use super::{MetricError, Result};

/// Per-source quality weights for the regenerated reference sets.
///
/// Empirical constants carried over from the evaluation campaign this
/// corpus comes from; treated as opaque configuration. Index 0 is the
/// original reference, the rest are the regenerated variants in source
/// order.
pub const GLOBAL_REF_WEIGHTS: [f64; 11] =
    [0.3, 0.9, -0.2, 0.5, -0.8, 0.4, 0.4, -0.1, 0.0, 0.7, 0.0];

/// Reference weighting scheme for one BLEU variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightScheme {
    /// No weight vector; the scorer weighs references implicitly
    Unweighted,
    /// Every source, every position weighs 1
    Uniform,
    /// Each source weighs its fixed global scalar at every position
    Global,
}

/// Build the per-source weight vectors for one scheme.
///
/// Returns `None` for [`WeightScheme::Unweighted`]; otherwise one vector
/// of length `n_utterances` per reference source. Never truncates or pads:
/// a zero utterance count or a source count the global table cannot cover
/// is a shape error.
pub fn build_ref_weights(
    scheme: WeightScheme,
    n_sources: usize,
    n_utterances: usize,
) -> Result<Option<Vec<Vec<f64>>>> {
    if n_utterances == 0 {
        return Err(MetricError::EmptyCorpus);
    }

    match scheme {
        WeightScheme::Unweighted => Ok(None),
        WeightScheme::Uniform => Ok(Some(vec![vec![1.0; n_utterances]; n_sources])),
        WeightScheme::Global => {
            if n_sources != GLOBAL_REF_WEIGHTS.len() {
                return Err(MetricError::ShapeMismatch {
                    source_id: "global reference weight table".into(),
                    expected: GLOBAL_REF_WEIGHTS.len(),
                    actual: n_sources,
                });
            }
            Ok(Some(
                GLOBAL_REF_WEIGHTS
                    .iter()
                    .map(|&w| vec![w; n_utterances])
                    .collect(),
            ))
        }
    }
}
