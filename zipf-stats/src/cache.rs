//! Initialize-once holder for the rank table

use crate::rank::RankTable;
use std::sync::{Arc, OnceLock};
use tracing::debug;
use zipf_core::Result;
use zipf_text::TextSource;

/// Builds the rank table at most once, then hands out shared references
#[derive(Debug, Default)]
pub struct RankTableCache {
    table: OnceLock<Arc<RankTable>>,
}

impl RankTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with a table built elsewhere
    pub fn with_table(table: RankTable) -> Self {
        let cache = Self::new();
        let _ = cache.table.set(Arc::new(table));
        cache
    }

    /// Return the cached table, building it from `source` on first use
    ///
    /// A failed build leaves the cache empty, so a later call retries.
    pub fn get_or_build(&self, source: &dyn TextSource) -> Result<Arc<RankTable>> {
        if let Some(table) = self.table.get() {
            debug!("rank table cache hit");
            return Ok(table.clone());
        }

        debug!(source = %source.describe(), "rank table cache miss");
        let stream = source.letter_stream()?;
        let built = Arc::new(RankTable::from_stream(&stream)?);

        // a concurrent builder may have won; either table is identical
        Ok(self.table.get_or_init(|| built).clone())
    }

    pub fn is_built(&self) -> bool {
        self.table.get().is_some()
    }
}
