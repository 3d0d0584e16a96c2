//! Data series behind the diagnostic charts
//!
//! Kept separate from rendering so the numbers can be checked without
//! drawing anything.

use serde::Serialize;
use zipf_core::Result;
use zipf_estimate::ReciprocalEstimator;
use zipf_stats::RankTable;

/// Samples per unit rank in the reciprocal chart
const SAMPLES_PER_RANK: usize = 10;

/// Letters and their counts, most frequent first
pub fn letter_frequency_series(table: &RankTable) -> Vec<(char, u64)> {
    table.iter().map(|e| (e.letter, e.count)).collect()
}

/// `(rank, count)` points of the discrete frequency function
pub fn frequency_function_series(table: &RankTable) -> Vec<(f64, f64)> {
    table.iter().map(|e| (e.rank as f64, e.count as f64)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReciprocalSeries {
    /// `(t, 1/t)` for every sample
    pub reference: Vec<(f64, f64)>,
    /// `(t, r_est(t))` for samples strictly above `1 + beta`
    pub estimate: Vec<(f64, f64)>,
}

/// Sample `t = 1.0, 1.1, ...` up to the last rank of the table
pub fn reciprocal_series(estimator: &ReciprocalEstimator) -> Result<ReciprocalSeries> {
    let last_rank = estimator.frequency_function().table().len();
    let steps = last_rank.saturating_sub(1) * SAMPLES_PER_RANK;
    let samples: Vec<f64> = (0..=steps)
        .map(|i| (SAMPLES_PER_RANK + i) as f64 / SAMPLES_PER_RANK as f64)
        .collect();

    let reference = samples.iter().map(|&t| (t, 1.0 / t)).collect();
    let estimate = samples
        .iter()
        .filter(|&&t| t > estimator.threshold())
        .map(|&t| estimator.eval(t).map(|y| (t, y)))
        .collect::<Result<Vec<_>>>()?;

    Ok(ReciprocalSeries { reference, estimate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use zipf_estimate::FrequencyFunction;

    fn linear_table() -> Arc<RankTable> {
        let counts: Vec<u64> = (1..=26).rev().collect();
        Arc::new(RankTable::from_counts_desc(&counts).unwrap())
    }

    #[test]
    fn test_letter_series_in_rank_order() {
        let series = letter_frequency_series(&linear_table());
        assert_eq!(series.len(), 26);
        assert_eq!(series[0], ('a', 26));
        assert_eq!(series[25], ('z', 1));
    }

    #[test]
    fn test_frequency_function_points() {
        let points = frequency_function_series(&linear_table());
        assert_eq!(points[12], (13.0, 14.0));
    }

    #[test]
    fn test_reciprocal_sampling() {
        let freq = Arc::new(FrequencyFunction::new(linear_table()));
        let estimator = ReciprocalEstimator::new(freq, 0.2);
        let series = reciprocal_series(&estimator).unwrap();

        assert_eq!(series.reference.len(), 251);
        assert_eq!(series.reference[0], (1.0, 1.0));
        assert_eq!(series.reference[250].0, 26.0);

        // 1.0, 1.1 and 1.2 are not strictly above 1 + beta
        assert_eq!(series.estimate.len(), 248);
        assert_eq!(series.estimate[0].0, 1.3);
        assert!(series.estimate.iter().all(|&(_, y)| y > 0.0));
    }
}
