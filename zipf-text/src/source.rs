//! Text sources
//!
//! The ranker only needs a `LetterStream`; where it comes from is behind
//! `TextSource` so the network is optional.

use crate::extract::extract_sections;
use crate::fetch::fetch_markup;
use crate::stream::LetterStream;
use zipf_core::{EstimatorConfig, Result};

/// Anything that can yield the cleaned letter stream
pub trait TextSource: Send + Sync {
    /// Short label used in logs
    fn describe(&self) -> String;

    fn letter_stream(&self) -> Result<LetterStream>;
}

/// Retrieves the configured document over HTTP on every call
#[derive(Debug, Clone)]
pub struct HttpSource {
    config: EstimatorConfig,
}

impl HttpSource {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }
}

impl TextSource for HttpSource {
    fn describe(&self) -> String {
        self.config.source_url.clone()
    }

    fn letter_stream(&self) -> Result<LetterStream> {
        let markup = fetch_markup(&self.config)?;
        MarkupSource::new(markup).letter_stream()
    }
}

/// Markup already held in memory; runs the pipeline minus retrieval
#[derive(Debug, Clone)]
pub struct MarkupSource {
    markup: String,
}

impl MarkupSource {
    pub fn new(markup: impl Into<String>) -> Self {
        Self { markup: markup.into() }
    }
}

impl TextSource for MarkupSource {
    fn describe(&self) -> String {
        format!("in-memory markup ({} bytes)", self.markup.len())
    }

    fn letter_stream(&self) -> Result<LetterStream> {
        let text = extract_sections(&self.markup)?;
        LetterStream::from_raw(&text)
    }
}

/// Plain text, normalized but not parsed as markup
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for StaticSource {
    fn describe(&self) -> String {
        "static text".to_string()
    }

    fn letter_stream(&self) -> Result<LetterStream> {
        LetterStream::from_raw(&self.text)
    }
}
