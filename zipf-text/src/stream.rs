//! The cleaned letter stream handed to the ranker

use crate::clean::clean_text;
use zipf_core::Result;

/// Lowercase letters separated by single spaces; immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStream {
    text: String,
}

impl LetterStream {
    /// Normalize arbitrary text into a stream
    pub fn from_raw(raw: &str) -> Result<Self> {
        Ok(Self { text: clean_text(raw)? })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Every letter in order, spaces skipped
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().filter(|c| *c != ' ')
    }

    pub fn len_letters(&self) -> usize {
        self.letters().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len_letters() == 0
    }
}
