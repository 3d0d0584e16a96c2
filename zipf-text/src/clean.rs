//! Normalization of extracted document text
//!
//! Turns section text into a stream of lowercase letters separated by
//! single spaces: notation spans are dropped first, then everything that is
//! not a letter or whitespace.

use regex::Regex;
use std::sync::OnceLock;
use zipf_core::{Result, ZipfError};

/// Delimited notation spans, matched non-greedily across line breaks
const NOTATION_PATTERNS: [&str; 4] = [
    r"(?s)\\\[.+?\\\]",
    r"(?s)\\\(.+?\\\)",
    r"(?s)\\begin\{equation\}.+?\\end\{equation\}",
    r"(?s)\\begin\{align\*\}.+?\\end\{align\*\}",
];

struct Patterns {
    notation: Vec<Regex>,
    hyphens: Regex,
    non_letters: Regex,
    whitespace: Regex,
}

static PATTERNS: OnceLock<std::result::Result<Patterns, String>> = OnceLock::new();

fn compile() -> std::result::Result<Patterns, String> {
    let compile_one = |p: &str| Regex::new(p).map_err(|e| format!("'{}': {}", p, e));
    Ok(Patterns {
        notation: NOTATION_PATTERNS
            .iter()
            .map(|p| compile_one(*p))
            .collect::<std::result::Result<_, _>>()?,
        hyphens: compile_one(r"[—\-]")?,
        non_letters: compile_one(r"[^a-z\s]")?,
        whitespace: compile_one(r"\s+")?,
    })
}

fn patterns() -> Result<&'static Patterns> {
    PATTERNS
        .get_or_init(compile)
        .as_ref()
        .map_err(|e| ZipfError::internal(format!("Invalid cleaning pattern {}", e)))
}

/// Remove notation, punctuation and digits; lowercase; collapse whitespace
pub fn clean_text(raw: &str) -> Result<String> {
    let p = patterns()?;

    let mut text = raw.to_string();
    for re in &p.notation {
        text = re.replace_all(&text, "").into_owned();
    }

    let text = text.to_lowercase();
    let text = p.hyphens.replace_all(&text, " ");
    let text = p.non_letters.replace_all(&text, "");
    let text = p.whitespace.replace_all(&text, " ");

    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_multiline_display_math() {
        let raw = "Before \\[ C = 2\\pi r\n = \\tau r \\] after";
        let cleaned = clean_text(raw).unwrap();
        assert_eq!(cleaned, "before after");
        assert!(!cleaned.contains('\\'));
        assert!(!cleaned.contains('['));
    }

    #[test]
    fn test_removes_inline_math_non_greedy() {
        let raw = "one \\(x\\) two \\(y\\) three";
        assert_eq!(clean_text(raw).unwrap(), "one two three");
    }

    #[test]
    fn test_removes_environments() {
        let raw = "a \\begin{equation}\ne^{i\\tau} = 1\n\\end{equation} b \
                   \\begin{align*} x &= y \\end{align*} c";
        assert_eq!(clean_text(raw).unwrap(), "a b c");
    }

    #[test]
    fn test_hyphens_and_em_dashes_become_spaces() {
        assert_eq!(clean_text("well-known—really").unwrap(), "well known really");
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        let cleaned = clean_text("Pi is 3.14159, Tau is 6.28!").unwrap();
        assert_eq!(cleaned, "pi is tau is ");
        assert!(cleaned.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("a\n\n\tb   c").unwrap(), "a b c");
    }
}
