//! zipf-pi Diagnostic Plots
//!
//! Three charts: letter counts by letter, the discrete frequency function,
//! and the reciprocal estimator against `1/r`.

mod render;
mod series;

pub use render::{
    render_all, render_frequency_function, render_letter_frequencies, render_reciprocal,
    FREQUENCY_FUNCTION_FILE, LETTER_FREQUENCY_FILE, RECIPROCAL_FILE,
};
pub use series::{
    frequency_function_series, letter_frequency_series, reciprocal_series, ReciprocalSeries,
};
