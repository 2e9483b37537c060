// src/fetch/error.rs
use thiserror::Error;

/// Longest body prefix quoted in a backend failure message.
pub const BODY_PREVIEW_CHARS: usize = 100;

/// Why a fetch produced no dataset. All variants reach the user as one
/// message string; the only recovery is another refresh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection refused, timeout, body read failure.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response.
    #[error("Backend Error: {status} - {body_preview}...")]
    Backend { status: u16, body_preview: String },
    /// 2xx response whose body is not a dataset.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    pub fn backend(status: u16, body: &str) -> Self {
        Self::Backend {
            status,
            body_preview: body.chars().take(BODY_PREVIEW_CHARS).collect(),
        }
    }

    /// Transport errors sometimes carry no text; fall back to a hint naming
    /// the endpoint the client tried.
    pub fn network(err: impl std::fmt::Display, endpoint: &str) -> Self {
        let text = err.to_string();
        if text.trim().is_empty() {
            Self::Network(format!(
                "Failed to connect to the backend server. Please ensure the backend is running on {endpoint}"
            ))
        } else {
            Self::Network(text)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Backend { .. } => "backend",
            Self::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_embeds_status_and_truncated_body() {
        let body = "x".repeat(250);
        let msg = FetchError::backend(503, &body).to_string();
        assert_eq!(msg, format!("Backend Error: 503 - {}...", "x".repeat(100)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let body = "é".repeat(120);
        match FetchError::backend(500, &body) {
            FetchError::Backend { body_preview, .. } => {
                assert_eq!(body_preview.chars().count(), 100)
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_network_error_uses_default_hint() {
        let e = FetchError::network("", "http://localhost:5000/api/summarize_news");
        assert_eq!(
            e.to_string(),
            "Failed to connect to the backend server. Please ensure the backend is running on http://localhost:5000/api/summarize_news"
        );
        let e = FetchError::network("connection refused", "http://x");
        assert_eq!(e.to_string(), "connection refused");
    }
}
