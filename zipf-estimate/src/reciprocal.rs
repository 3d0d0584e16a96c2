//! The reciprocal estimator `r_est(r)`

use crate::freq::FrequencyFunction;
use std::sync::Arc;
use zipf_core::{Result, ZipfError};

/// Approximates `1/r` from the shape of the frequency function
///
/// Below `1 + beta` the exact reciprocal is returned. From `1 + beta` on,
/// the estimate is `freq(r - beta) / ((1 + beta) * freq(1))`.
pub struct ReciprocalEstimator {
    freq: Arc<FrequencyFunction>,
    beta: f64,
}

impl ReciprocalEstimator {
    pub fn new(freq: Arc<FrequencyFunction>, beta: f64) -> Self {
        Self { freq, beta }
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn frequency_function(&self) -> &FrequencyFunction {
        &self.freq
    }

    /// First rank at which the frequency-based branch applies
    pub fn threshold(&self) -> f64 {
        1.0 + self.beta
    }

    pub fn eval(&self, r: f64) -> Result<f64> {
        if !r.is_finite() || r < 1.0 {
            return Err(ZipfError::domain(format!(
                "cannot evaluate r_est on r = {}; ranks start at 1",
                r
            )));
        }

        if r < self.threshold() {
            return Ok(1.0 / r);
        }

        let shifted = self.freq.eval(r - self.beta)?;
        let top = self.freq.eval(1.0)?;
        Ok(shifted / (self.threshold() * top))
    }
}
