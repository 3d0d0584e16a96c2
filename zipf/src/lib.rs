//! zipf-pi - approximating pi from letter frequencies
//!
//! Data flows one way:
//! text source → rank table → frequency function → reciprocal estimator → pi.
//!
//! A `Zipf` engine owns its source and its rank table cache. Engines are
//! independent: two engines with different `beta` (or different sources)
//! can run in the same process.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub use zipf_core::{codes, EstimatorConfig, Result, Severity, ZipfError, LETTERS_IN_ALPHABET};
pub use zipf_estimate::{FrequencyFunction, PiEstimate, PiEstimator, ReciprocalEstimator};
pub use zipf_stats::{LetterCounts, RankEntry, RankTable, RankTableCache};
pub use zipf_text::{HttpSource, LetterStream, MarkupSource, StaticSource, TextSource};

/// Main engine
pub struct Zipf {
    config: EstimatorConfig,
    source: Box<dyn TextSource>,
    tables: RankTableCache,
    freq: std::sync::OnceLock<Arc<FrequencyFunction>>,
}

impl Zipf {
    /// Engine reading the configured document over HTTP
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        let source = HttpSource::new(config.clone());
        Self::with_source(config, source)
    }

    pub fn with_source(config: EstimatorConfig, source: impl TextSource + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: Box::new(source),
            tables: RankTableCache::new(),
            freq: std::sync::OnceLock::new(),
        })
    }

    /// Engine over a rank table built elsewhere; the source is never read
    pub fn with_table(config: EstimatorConfig, table: RankTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: Box::new(StaticSource::new("")),
            tables: RankTableCache::with_table(table),
            freq: std::sync::OnceLock::new(),
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// The rank table, built on first use
    pub fn rank_table(&self) -> Result<Arc<RankTable>> {
        self.tables.get_or_build(self.source.as_ref())
    }

    /// Frequency function over the cached rank table, sharing one memo
    pub fn frequency_function(&self) -> Result<Arc<FrequencyFunction>> {
        if let Some(freq) = self.freq.get() {
            return Ok(freq.clone());
        }
        let table = self.rank_table()?;
        Ok(self
            .freq
            .get_or_init(|| Arc::new(FrequencyFunction::new(table)))
            .clone())
    }

    pub fn reciprocal_estimator(&self) -> Result<ReciprocalEstimator> {
        Ok(ReciprocalEstimator::new(
            self.frequency_function()?,
            self.config.beta,
        ))
    }

    pub fn estimate_pi(&self) -> Result<PiEstimate> {
        let estimator = PiEstimator::new(
            Arc::new(self.reciprocal_estimator()?),
            LETTERS_IN_ALPHABET,
        );
        let estimate = estimator.estimate()?;
        debug!(abs_error = estimate.abs_error(), "pi estimate error");
        Ok(estimate)
    }

    /// Render the three diagnostic charts into `dir`
    pub fn render_plots(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let table = self.rank_table()?;
        let estimator = self.reciprocal_estimator()?;
        zipf_plot::render_all(dir, &table, &estimator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small document whose sections use every letter
    const SAMPLE_MARKUP: &str = r#"<html><body>
        <div class="nav">Menu 123</div>
        <div class="section">
          <p>The quick brown fox jumps over the lazy dog.</p>
          <p>Circles \[ C = 2\pi r
             = \tau r \] are everywhere; tau-day is June 28th.</p>
        </div>
        <div class="section"><p>Pack my box with five dozen liquor jugs!</p></div>
    </body></html>"#;

    fn sample_engine(beta: f64) -> Zipf {
        let config = EstimatorConfig::default().with_beta(beta);
        Zipf::with_source(config, MarkupSource::new(SAMPLE_MARKUP)).unwrap()
    }

    #[test]
    fn test_end_to_end_from_markup() {
        let engine = sample_engine(0.2);
        let table = engine.rank_table().unwrap();
        assert_eq!(table.len(), 26);

        let estimate = engine.estimate_pi().unwrap();
        assert!(estimate.value.is_finite() && estimate.value > 0.0);
        assert_eq!(estimate.terms.len(), 26);
        assert_eq!(estimate.terms[0], 1.0);
    }

    #[test]
    fn test_repeated_estimates_are_identical() {
        let engine = sample_engine(0.2);
        let a = engine.estimate_pi().unwrap().value;
        let b = engine.estimate_pi().unwrap().value;
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_engines_with_different_beta_coexist() {
        let narrow = sample_engine(0.2);
        let wide = sample_engine(0.7);
        let a = narrow.estimate_pi().unwrap();
        let b = wide.estimate_pi().unwrap();
        assert_eq!(a.beta, 0.2);
        assert_eq!(b.beta, 0.7);
        assert_ne!(a.value, b.value);
    }

    #[test]
    fn test_incomplete_source_fails() {
        let config = EstimatorConfig::default();
        let engine = Zipf::with_source(config, StaticSource::new("only a few letters")).unwrap();
        assert!(engine.estimate_pi().unwrap_err().is_table_incomplete());
    }

    #[test]
    fn test_synthetic_table_engine() {
        let counts: Vec<u64> = (1..=26).rev().collect();
        let table = RankTable::from_counts_desc(&counts).unwrap();
        let engine = Zipf::with_table(EstimatorConfig::default(), table).unwrap();
        let freq = engine.frequency_function().unwrap();
        assert_eq!(freq.eval(13.0).unwrap(), 14.0);
        let mid = freq.eval(13.5).unwrap();
        assert!(mid < 14.0 && mid > 13.0);
    }

    #[test]
    fn test_estimate_always_sums_whole_alphabet() {
        let counts: Vec<u64> = (1..=26).map(|r| 10_000 / r).collect();
        let table = RankTable::from_counts_desc(&counts).unwrap();
        let config = EstimatorConfig::from_json_str(r#"{ "beta": 0.3 }"#).unwrap();
        let engine = Zipf::with_table(config, table).unwrap();
        assert_eq!(engine.estimate_pi().unwrap().terms.len(), LETTERS_IN_ALPHABET);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EstimatorConfig::default().with_beta(-1.0);
        let err = Zipf::with_source(config, StaticSource::new("")).err().unwrap();
        assert_eq!(err.code, codes::CONFIG_ERROR);
    }
}
