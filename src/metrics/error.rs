//! Error types for metric computation

use thiserror::Error;

/// Result type for metric operations
pub type Result<T> = std::result::Result<T, MetricError>;

/// Errors that can occur while scoring a system
#[derive(Debug, Error)]
pub enum MetricError {
    /// Weight vector / utterance count disagreement
    #[error("Weight shape mismatch for {source_id}: expected {expected}, got {actual}")]
    ShapeMismatch {
        source_id: String,
        expected: usize,
        actual: usize,
    },

    /// The corpus carries no utterances to score
    #[error("Cannot score an empty corpus")]
    EmptyCorpus,

    /// A scoring capability rejected its input
    #[error("Scoring failed for {metric}: {message}")]
    ScoringFailure { metric: String, message: String },
}
