//! zipf-pi Estimators
//!
//! - `FrequencyFunction`: continuous extension of a rank table
//! - `ReciprocalEstimator`: piecewise approximation of `1/r`
//! - `PiEstimator`: Basel-style summation over the ranks
//!
//! Each owns its inputs through `Arc`, so several estimators (for example
//! with different `beta`) can share one rank table.

mod freq;
mod helpers;
mod pi;
mod reciprocal;

pub use freq::FrequencyFunction;
pub use helpers::{is_close, lerp};
pub use pi::{PiEstimate, PiEstimator};
pub use reciprocal::ReciprocalEstimator;
