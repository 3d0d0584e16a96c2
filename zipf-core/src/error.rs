//! Structured errors
//!
//! Every failure in the pipeline is a `ZipfError` value carrying a
//! machine-readable code. Nothing is recovered locally: errors propagate
//! up to the binary, which reports them and exits.

use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const RETRIEVAL_ERROR: &str = "RETRIEVAL_ERROR";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const TABLE_INCOMPLETE: &str = "TABLE_INCOMPLETE";
    pub const RENDER_ERROR: &str = "RENDER_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The requested computation failed
    Error,
    /// The run cannot continue
    Fatal,
}

/// Structured error shared by every crate in the workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipfError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Propagation notes, innermost first
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,

    pub severity: Severity,
}

impl ZipfError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            notes: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn retrieval(details: impl Into<String>) -> Self {
        Self::new(codes::RETRIEVAL_ERROR, format!("Retrieval failed: {}", details.into()))
            .with_suggestion("Check network connectivity and that the source document is reachable")
            .with_severity(Severity::Fatal)
    }

    pub fn domain(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    /// Fewer distinct letters than the alphabet size were found
    pub fn table_incomplete(found: usize, expected: usize, missing: &[char]) -> Self {
        let missing: String = missing.iter().collect();
        Self::new(
            codes::TABLE_INCOMPLETE,
            format!(
                "Rank table incomplete: found {} distinct letters, expected {} (missing: {})",
                found, expected, missing
            ),
        )
        .with_suggestion("The source text must contain every letter of the alphabet")
        .with_severity(Severity::Fatal)
    }

    pub fn render(details: impl Into<String>) -> Self {
        Self::new(codes::RENDER_ERROR, format!("Render error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Invalid configuration: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }

    // ========== Predicates ==========

    pub fn is_retrieval(&self) -> bool {
        self.code == codes::RETRIEVAL_ERROR
    }

    pub fn is_domain(&self) -> bool {
        self.code == codes::DOMAIN_ERROR
    }

    pub fn is_table_incomplete(&self) -> bool {
        self.code == codes::TABLE_INCOMPLETE
    }
}

impl std::fmt::Display for ZipfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for note in &self.notes {
            write!(f, "; {}", note)?;
        }
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ZipfError {}

impl From<ConfigError> for ZipfError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}
