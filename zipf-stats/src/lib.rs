//! zipf-pi Frequency Ranker
//!
//! Counts letters in a `LetterStream` and orders them into a `RankTable`.
//! Ties between equal counts are broken alphabetically.

mod cache;
mod counter;
mod rank;

pub use cache::RankTableCache;
pub use counter::LetterCounts;
pub use rank::{RankEntry, RankTable};
