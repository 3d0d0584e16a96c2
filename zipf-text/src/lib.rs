//! zipf-pi Text Acquisition
//!
//! Retrieves the source document, keeps only its section regions, strips
//! notation and punctuation, and yields a `LetterStream`.

mod clean;
mod extract;
mod fetch;
mod source;
mod stream;

pub use clean::clean_text;
pub use extract::extract_sections;
pub use fetch::{fetch_markup, FetchError};
pub use source::{HttpSource, MarkupSource, StaticSource, TextSource};
pub use stream::LetterStream;
