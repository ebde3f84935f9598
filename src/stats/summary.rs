//! Summary statistics over per-dialogue counts

/// Mean and population standard deviation of a sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub std: f64,
}

/// Summarize a sequence of counts; `None` when it is empty.
#[must_use]
pub fn summarize(values: &[u64]) -> Option<SummaryStats> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Some(SummaryStats {
        mean,
        std: variance.sqrt(),
    })
}
