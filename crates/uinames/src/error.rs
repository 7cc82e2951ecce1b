//! Client error taxonomy.

use reqwest::StatusCode;
use uinames_core::{RequestError, WrapError};

/// Errors from a generation call.
///
/// Every variant reaches the caller; nothing is retried or suppressed.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally before any request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// The service answered with a 4xx status (bad amount, gender or region).
    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The service answered with any other non-2xx status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected payload shape: {0}")]
    Shape(#[from] WrapError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by the error, if the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } | ClientError::Status { status, .. } => {
                Some(*status)
            }
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the caller's parameters were at fault, locally or remotely.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidRequest(_) | ClientError::Rejected { .. }
        )
    }

    pub(crate) fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let body = body_preview(body);
        if status.is_client_error() {
            ClientError::Rejected {
                status: status.as_u16(),
                body,
            }
        } else {
            ClientError::Status {
                status: status.as_u16(),
                body,
            }
        }
    }
}

/// Whitespace-collapsed, length-limited rendering of a response body.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
