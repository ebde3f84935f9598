//! Report assembly
//!
//! Merges the per-system metric results into one comma-delimited table
//! with a fixed header. The roster is the ascending union of system ids
//! seen in the rating table and the hypothesis set; a system missing from
//! any metric family gets a literal `nan` in that family's columns and is
//! never dropped. Output is deterministic: identical inputs produce
//! byte-identical reports.

use crate::corpus::{mean_rating, RatingTable, SystemId};
use crate::metrics::SystemScores;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

/// Fixed report header; column order is part of the output contract.
pub const HEADER: &str = "System,Averaged_Human_Rating,BLEU-4,deltaBLEU-4_Uniformed,\
deltaBLEU-4_Global,ROUGE-2,ROUGE-L,Distinct-1,Distinct-2,Distinct-3";

/// Marker for a metric a system has no data for
pub const MISSING: &str = "nan";

/// One assembled report row
#[derive(Clone, Debug)]
pub struct Row {
    /// System this row describes
    pub system: SystemId,
    /// Column values after the system id, `None` rendered as `nan`
    pub values: [Option<f64>; 9],
}

/// Assembled evaluation report
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Rows in ascending system-id order
    pub rows: Vec<Row>,
}

impl Report {
    /// Merge rating table and per-system scores into ordered rows.
    #[must_use]
    pub fn assemble(ratings: &RatingTable, scores: &BTreeMap<SystemId, SystemScores>) -> Self {
        let roster: BTreeSet<SystemId> =
            ratings.keys().chain(scores.keys()).copied().collect();

        let rows = roster
            .into_iter()
            .map(|system| {
                let mut values = [None; 9];
                values[0] = mean_rating(ratings, system);
                if let Some(s) = scores.get(&system) {
                    values[1] = s.bleu[0];
                    values[2] = s.bleu[1];
                    values[3] = s.bleu[2];
                    if let Some(rouge) = s.rouge {
                        values[4] = Some(rouge.rouge_2);
                        values[5] = Some(rouge.rouge_l);
                    }
                    if let Some(distinct) = s.distinct {
                        values[6] = Some(distinct[0]);
                        values[7] = Some(distinct[1]);
                        values[8] = Some(distinct[2]);
                    }
                }
                Row { system, values }
            })
            .collect();
        Self { rows }
    }

    /// Serialize to the flat CSV format, header included.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.system.to_string());
            for value in &row.values {
                out.push(',');
                out.push_str(&format_value(*value));
            }
            out.push('\n');
        }
        out
    }

    /// Write the CSV report to `path`.
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_csv())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_csv())
    }
}

/// Absent and non-finite values both render as the missing marker.
fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        _ => MISSING.to_string(),
    }
}
