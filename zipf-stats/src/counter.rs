//! Letter occurrence counting

use serde::Serialize;
use zipf_text::LetterStream;

/// Occurrences of each of `a..=z`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LetterCounts {
    counts: [u64; 26],
}

impl LetterCounts {
    pub fn from_stream(stream: &LetterStream) -> Self {
        let mut counts = Self::default();
        for c in stream.letters() {
            counts.record(c);
        }
        counts
    }

    /// Count one character; anything outside `a..=z` is ignored
    pub fn record(&mut self, c: char) {
        if c.is_ascii_lowercase() {
            self.counts[(c as u8 - b'a') as usize] += 1;
        }
    }

    pub fn get(&self, letter: char) -> u64 {
        if letter.is_ascii_lowercase() {
            self.counts[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Letters that were seen at least once
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// Letters of the alphabet that never appeared
    pub fn missing(&self) -> Vec<char> {
        ('a'..='z').filter(|&c| self.get(c) == 0).collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Seen letters by descending count; equal counts in alphabetical order
    pub fn most_common(&self) -> Vec<(char, u64)> {
        let mut pairs: Vec<(char, u64)> = ('a'..='z')
            .zip(self.counts.iter().copied())
            .filter(|&(_, n)| n > 0)
            .collect();
        // stable sort keeps the alphabetical order among ties
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}
