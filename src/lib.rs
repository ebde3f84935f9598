//! # evaluar
//!
//! Evaluation toolkit for dialogue-generation systems.
//!
//! Two modes of operation:
//!
//! - **Report**: load per-system hypotheses, multi-source references and a
//!   human-rating file, score every system (human rating, BLEU-4 plus two
//!   deltaBLEU variants, ROUGE-2/ROUGE-L recall, distinct-1/2/3) and merge
//!   the results into one CSV report, with `nan` markers wherever a system
//!   lacks data for a metric family.
//! - **Stats**: descriptive statistics (utterance/token counts, uniqueness)
//!   over raw dialogue corpora in Ubuntu-tsv, Twitter-log or JSON form.

pub mod cli;
pub mod corpus;
pub mod metrics;
pub mod report;
pub mod stats;

pub use corpus::{CorpusError, CorpusLayout, SystemId};
pub use metrics::{MetricEngine, SystemScores};
pub use report::Report;
