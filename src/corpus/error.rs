//! Error types for corpus loading
//!
//! Distinguishes errors that abort a run from those that degrade to a
//! missing-value marker in the final report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while loading a dialogue evaluation corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A required directory or file is absent
    #[error("Missing corpus data at {path}")]
    MissingData { path: PathBuf },

    /// Reference/hypothesis utterance counts disagree
    #[error("Utterance count mismatch in {source_id}: expected {expected}, got {actual}")]
    ShapeMismatch {
        source_id: String,
        expected: usize,
        actual: usize,
    },

    /// A record is missing expected fields
    #[error("Malformed input in {context}: {message}")]
    MalformedInput { context: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CorpusError {
    /// Whether this error must terminate the run.
    ///
    /// Malformed records are skipped at the call site; everything else
    /// affects the corpus as a whole and propagates to the top level.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_names_source_and_counts() {
        let err = CorpusError::ShapeMismatch {
            source_id: "refgen_result3".into(),
            expected: 11,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("refgen_result3"));
        assert!(msg.contains("11"));
        assert!(msg.contains("10"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_input_not_fatal() {
        let err = CorpusError::MalformedInput {
            context: "rating line 7".into(),
            message: "unterminated bracket".into(),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CorpusError = io_err.into();
        assert!(matches!(err, CorpusError::Io(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_all_error_variants_display() {
        let errors: Vec<CorpusError> = vec![
            CorpusError::MissingData {
                path: PathBuf::from("/corpus/hypotheses"),
            },
            CorpusError::ShapeMismatch {
                source_id: "s".into(),
                expected: 1,
                actual: 2,
            },
            CorpusError::MalformedInput {
                context: "c".into(),
                message: "m".into(),
            },
        ];
        for err in errors {
            assert!(!err.to_string().is_empty(), "empty display for {err:?}");
        }
    }
}
