//! Blocking retrieval of the source document

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use zipf_core::{EstimatorConfig, ZipfError};

/// Error type for document retrieval
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<FetchError> for ZipfError {
    fn from(err: FetchError) -> Self {
        let timed_out = matches!(
            &err,
            FetchError::Transport { source, .. } | FetchError::Body { source, .. } if source.is_timeout()
        );
        let wrapped = ZipfError::retrieval(err.to_string());
        if timed_out {
            wrapped.with_note("request timed out")
        } else {
            wrapped
        }
    }
}

/// Fetch the raw markup at `config.source_url`
pub fn fetch_markup(config: &EstimatorConfig) -> Result<String, FetchError> {
    let url = config.source_url.as_str();
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)?;

    info!(url, timeout_secs = config.timeout_secs, "retrieving source document");

    let response = client.get(url).send().map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = body.len(), "retrieved source document");

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_maps_to_retrieval() {
        let err: ZipfError = FetchError::Status {
            url: "https://example.invalid/".to_string(),
            status: 404,
        }
        .into();
        assert!(err.is_retrieval());
        assert!(err.message.contains("HTTP 404"), "message was: {}", err.message);
    }

    #[test]
    fn test_unreachable_host_is_retrieval_error() {
        // Port 9 on loopback is the discard port; nothing listens there in CI
        let config = EstimatorConfig::default()
            .with_source_url("http://127.0.0.1:9/")
            .with_timeout_secs(2);
        let err: ZipfError = fetch_markup(&config).unwrap_err().into();
        assert!(err.is_retrieval());
    }
}
