//! Client error type.

/// Error returned by every [`MemoryClient`](crate::MemoryClient) operation.
///
/// `Validation` is raised locally before any request is sent. `Api` carries the HTTP status of a
/// failed round-trip; branch on [`ClientError::status`] to inspect it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Request timed out after {elapsed_ms}ms: {url}")]
    Timeout { elapsed_ms: u64, url: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_and_body() {
        let e = ClientError::Api {
            status: 404,
            message: "Memory not found".into(),
        };
        assert_eq!(e.status(), Some(404));
        assert!(e.is_api());
        assert!(e.to_string().contains("Memory not found"));
    }

    #[test]
    fn validation_has_no_status() {
        let e = ClientError::validation("Either text or metadata must be provided for update.");
        assert_eq!(e.status(), None);
        assert!(e.is_validation());
    }
}
