//! Rank tables: rank 1 is the most frequent letter

use crate::counter::LetterCounts;
use serde::Serialize;
use tracing::info;
use zipf_core::{Result, ZipfError, LETTERS_IN_ALPHABET};
use zipf_text::LetterStream;

/// One row of a rank table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub letter: char,
    pub count: u64,
}

/// Counts indexed by rank `1..=len`, non-increasing, every count positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankTable {
    entries: Vec<RankEntry>,
}

impl RankTable {
    /// Rank the letters of a stream; every letter of the alphabet must occur
    pub fn from_stream(stream: &LetterStream) -> Result<Self> {
        Self::from_counts(&LetterCounts::from_stream(stream))
    }

    pub fn from_counts(counts: &LetterCounts) -> Result<Self> {
        let distinct = counts.distinct();
        if distinct != LETTERS_IN_ALPHABET {
            return Err(ZipfError::table_incomplete(
                distinct,
                LETTERS_IN_ALPHABET,
                &counts.missing(),
            ));
        }

        let entries: Vec<RankEntry> = counts
            .most_common()
            .into_iter()
            .enumerate()
            .map(|(i, (letter, count))| RankEntry { rank: i + 1, letter, count })
            .collect();

        info!(
            letters = entries.len(),
            total = counts.total(),
            top = %entries[0].letter,
            "built rank table"
        );
        Ok(Self { entries })
    }

    /// Build directly from counts already in rank order
    ///
    /// Letters are labelled `a, b, c, ...` by rank. Used for synthetic
    /// tables; the sequence must have `LETTERS_IN_ALPHABET` positive,
    /// non-increasing values.
    pub fn from_counts_desc(counts: &[u64]) -> Result<Self> {
        if counts.len() != LETTERS_IN_ALPHABET {
            return Err(ZipfError::domain(format!(
                "expected {} counts in rank order, got {}",
                LETTERS_IN_ALPHABET,
                counts.len()
            )));
        }
        if let Some(pos) = counts.iter().position(|&n| n == 0) {
            return Err(ZipfError::domain(format!("rank {} has a zero count", pos + 1)));
        }
        if let Some(pos) = counts.windows(2).position(|w| w[1] > w[0]) {
            return Err(ZipfError::domain(format!(
                "counts must be non-increasing: rank {} ({}) exceeds rank {} ({})",
                pos + 2,
                counts[pos + 1],
                pos + 1,
                counts[pos]
            )));
        }

        let entries = counts
            .iter()
            .zip('a'..='z')
            .enumerate()
            .map(|(i, (&count, letter))| RankEntry { rank: i + 1, letter, count })
            .collect();
        Ok(Self { entries })
    }

    /// Count at `rank`, `None` outside `1..=len`
    pub fn get(&self, rank: usize) -> Option<u64> {
        self.entry(rank).map(|e| e.count)
    }

    pub fn letter(&self, rank: usize) -> Option<char> {
        self.entry(rank).map(|e| e.letter)
    }

    fn entry(&self, rank: usize) -> Option<&RankEntry> {
        rank.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
