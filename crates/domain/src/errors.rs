//! Error types used throughout the suggestion engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the suggestion engine
///
/// `Clone` so that one failed load can be handed to every caller attached to
/// it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SuggestError {
    #[error("Fetch failed for {identifier}: {message}")]
    Fetch { identifier: String, message: String },

    #[error("Parse failed for {identifier}: {message}")]
    Parse { identifier: String, message: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SuggestError {
    /// Shorthand for [`SuggestError::Fetch`].
    pub fn fetch(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch { identifier: identifier.into(), message: message.into() }
    }

    /// Shorthand for [`SuggestError::Parse`].
    pub fn parse(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse { identifier: identifier.into(), message: message.into() }
    }

    /// Stable label for structured log fields.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "fetch",
            Self::Parse { .. } => "parse",
            Self::InvalidQuery(_) => "invalid_query",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether issuing the same request again may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

/// Result type alias for suggestion engine operations
pub type Result<T> = std::result::Result<T, SuggestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_identifier() {
        let err = SuggestError::fetch("dataset/tz.json", "connection refused");
        assert_eq!(err.to_string(), "Fetch failed for dataset/tz.json: connection refused");
        assert_eq!(err.label(), "fetch");
        assert!(err.is_retryable());
    }

    #[test]
    fn only_fetch_failures_are_retryable() {
        assert!(!SuggestError::parse("x", "bad").is_retryable());
        assert!(!SuggestError::InvalidQuery("empty".into()).is_retryable());
        assert!(!SuggestError::Config("missing".into()).is_retryable());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(SuggestError::InvalidQuery("empty query".into()))
            .expect("serialize");
        assert_eq!(json, serde_json::json!({"type": "InvalidQuery", "message": "empty query"}));

        let back: SuggestError = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, SuggestError::InvalidQuery("empty query".into()));
    }
}
