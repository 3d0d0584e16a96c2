//! Section extraction from HTML markup

use scraper::{Html, Selector};
use tracing::{debug, warn};
use zipf_core::{Result, ZipfError};

/// Regions of the document that hold prose
const SECTION_SELECTOR: &str = "div.section";

/// Text content of every section region, in document order, joined by newlines
pub fn extract_sections(markup: &str) -> Result<String> {
    let selector = Selector::parse(SECTION_SELECTOR)
        .map_err(|e| ZipfError::internal(format!("Invalid selector '{}': {}", SECTION_SELECTOR, e)))?;

    let document = Html::parse_document(markup);
    let sections: Vec<String> = document
        .select(&selector)
        .map(|section| section.text().collect::<String>())
        .collect();

    if sections.is_empty() {
        warn!("no section regions found in {} bytes of markup", markup.len());
    } else {
        debug!(count = sections.len(), "extracted section regions");
    }

    Ok(sections.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_section_divs_are_kept() {
        let html = r#"<html><body>
            <div class="nav">Skip me</div>
            <div class="section"><p>First <em>part</em></p></div>
            <div class="footer">Nope</div>
            <div class="section extra"><p>Second</p></div>
        </body></html>"#;
        let text = extract_sections(html).unwrap();
        assert!(text.contains("First part"));
        assert!(text.contains("Second"));
        assert!(!text.contains("Skip"));
        assert!(!text.contains("Nope"));
        assert!(text.find("First").unwrap() < text.find("Second").unwrap());
    }

    #[test]
    fn test_sections_joined_by_newline() {
        let html = r#"<div class="section">a</div><div class="section">b</div>"#;
        assert_eq!(extract_sections(html).unwrap(), "a\nb");
    }

    #[test]
    fn test_no_sections_yields_empty_text() {
        assert_eq!(extract_sections("<p>nothing here</p>").unwrap(), "");
    }
}
