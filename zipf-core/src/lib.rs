//! zipf-pi Core - Fundamental types
//!
//! This crate provides the types shared by every stage of the pipeline:
//! - `ZipfError`: Structured errors with machine-readable codes
//! - `EstimatorConfig`: Smoothing constant, alphabet size, source location
//! - Build-time constants

mod config;
mod error;

pub use config::{ConfigError, EstimatorConfig};
pub use error::{codes, Severity, ZipfError};

/// Number of ranks in a complete table
pub const LETTERS_IN_ALPHABET: usize = 26;

/// Smoothing constant used by the reciprocal estimator
pub const DEFAULT_BETA: f64 = 0.2;

/// The fixed document whose letters are counted
pub const SOURCE_URL: &str = "https://tauday.com/tau-manifesto";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub type Result<T, E = ZipfError> = std::result::Result<T, E>;
