use reqwest::StatusCode;
use thiserror::Error;

use crate::protocol::ErrorBody;

/// Errors emitted while talking to the quiz backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx response that carried a `detail`.
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
    #[error("API error: {0}")]
    HttpStatus(StatusCode),
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message());

        match detail {
            Some(detail) => Self::Rejected { status, detail },
            None => Self::HttpStatus(status),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } | Self::HttpStatus(status) => Some(*status),
            Self::Http(err) => err.status(),
            Self::Decode(_) => None,
        }
    }
}
