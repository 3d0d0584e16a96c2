//! Basel-problem estimator for pi
//!
//! Since `sum 1/n^2 = pi^2 / 6`, substituting `r_est(n)` for `1/n` over the
//! ranked letters gives `pi ~ sqrt(6 * sum r_est(n)^2)`.

use crate::reciprocal::ReciprocalEstimator;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use zipf_core::{Result, ZipfError};

/// Result of one estimation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiEstimate {
    pub value: f64,
    pub partial_sum: f64,
    pub beta: f64,
    /// `r_est(n)^2` for `n = 1..=terms.len()`
    pub terms: Vec<f64>,
}

impl PiEstimate {
    pub fn abs_error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}

pub struct PiEstimator {
    reciprocal: Arc<ReciprocalEstimator>,
    letters: usize,
}

impl PiEstimator {
    pub fn new(reciprocal: Arc<ReciprocalEstimator>, letters: usize) -> Self {
        Self { reciprocal, letters }
    }

    pub fn estimate(&self) -> Result<PiEstimate> {
        let available = self.reciprocal.frequency_function().table().len();
        if self.letters == 0 || self.letters > available {
            return Err(ZipfError::domain(format!(
                "cannot sum {} ranks over a table of {}",
                self.letters, available
            )));
        }

        let terms = (1..=self.letters)
            .map(|n| {
                self.reciprocal
                    .eval(n as f64)
                    .map(|r| r * r)
                    .map_err(|e| e.with_note(format!("while evaluating r_est({})", n)))
            })
            .collect::<Result<Vec<f64>>>()?;

        let partial_sum: f64 = terms.iter().sum();
        let value = (6.0 * partial_sum).sqrt();
        info!(value, partial_sum, beta = self.reciprocal.beta(), "estimated pi");

        Ok(PiEstimate {
            value,
            partial_sum,
            beta: self.reciprocal.beta(),
            terms,
        })
    }

    /// Just the scalar estimate
    pub fn value(&self) -> Result<f64> {
        self.estimate().map(|e| e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrequencyFunction;
    use zipf_core::LETTERS_IN_ALPHABET;
    use zipf_stats::RankTable;

    fn pi_estimator(counts: &[u64], beta: f64) -> PiEstimator {
        let table = Arc::new(RankTable::from_counts_desc(counts).unwrap());
        let freq = Arc::new(FrequencyFunction::new(table));
        PiEstimator::new(
            Arc::new(ReciprocalEstimator::new(freq, beta)),
            LETTERS_IN_ALPHABET,
        )
    }

    #[test]
    fn test_matches_closed_form() {
        let counts: Vec<u64> = (1..=26).rev().collect();
        let estimate = pi_estimator(&counts, 0.2).estimate().unwrap();
        assert_eq!(estimate.terms.len(), 26);
        assert_eq!(estimate.terms[0], 1.0);

        let sum: f64 = estimate.terms.iter().sum();
        assert_eq!(estimate.partial_sum, sum);
        assert_eq!(estimate.value, (6.0 * sum).sqrt());
    }

    #[test]
    fn test_idempotent() {
        let counts: Vec<u64> = (1..=26).map(|r| 10_000 / r).collect();
        let estimator = pi_estimator(&counts, 0.2);
        let first = estimator.value().unwrap();
        let second = estimator.value().unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_shifted_zipf_counts_approach_truncated_basel_sum() {
        // with counts proportional to 1/(r + beta), r_est(n) == 1/n
        let counts: Vec<u64> = (1..=26)
            .map(|r| (1e12 / (r as f64 + 0.2)).round() as u64)
            .collect();
        let estimate = pi_estimator(&counts, 0.2).estimate().unwrap();
        let basel: f64 = (1..=26).map(|n| 1.0 / (n * n) as f64).sum();
        let expected = (6.0 * basel).sqrt();
        assert!((estimate.value - expected).abs() < 1e-9, "{} vs {}", estimate.value, expected);
        assert!(estimate.abs_error() < 0.04, "error {}", estimate.abs_error());
    }

    #[test]
    fn test_too_many_letters_is_domain_error() {
        let counts: Vec<u64> = (1..=26).rev().collect();
        let table = Arc::new(RankTable::from_counts_desc(&counts).unwrap());
        let freq = Arc::new(FrequencyFunction::new(table));
        let estimator = PiEstimator::new(Arc::new(ReciprocalEstimator::new(freq, 0.2)), 30);
        assert!(estimator.estimate().unwrap_err().is_domain());
    }
}
