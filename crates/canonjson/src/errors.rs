//! Error types for canonjson.
//!
//! Every failure surfaces to the caller as a `CanonError`. Parse failures are
//! kept apart from encode failures so callers can tell "bad input" from
//! "could not re-serialize".

use thiserror::Error;

/// Result alias used across the crate.
pub type CanonResult<T> = Result<T, CanonError>;

/// Errors produced while canonicalizing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// Input is not syntactically valid JSON.
    #[error("invalid JSON at line {line} column {column} ({category}): {message}")]
    Parse {
        line: usize,
        column: usize,
        category: &'static str,
        message: String,
    },

    /// Input nests arrays/objects deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },

    /// Input is larger than the configured byte limit.
    #[error("input too large ({size} bytes > limit {limit})")]
    InputTooLarge { size: usize, limit: usize },

    /// Re-serialization of a value failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Caller supplied unusable options.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CanonError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a parse error from a serde_json error, keeping its position.
    pub fn from_parse(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let category = match err.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };

        // serde_json's Display appends " at line L column C"; strip it since
        // the position is carried separately.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };

        Self::Parse {
            line: err.line(),
            column: err.column(),
            category,
            message,
        }
    }

    /// True for malformed-input failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Stable short code for logs and API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::DepthExceeded { .. } => "depth_exceeded",
            Self::InputTooLarge { .. } => "input_too_large",
            Self::Encode(_) => "encode",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let e = CanonError::from_parse(&err);
        match e {
            CanonError::Parse { line, category, ref message, .. } => {
                assert_eq!(line, 2);
                assert_eq!(category, "syntax");
                assert!(!message.contains(" at line "));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(e.is_parse());
        assert_eq!(e.code(), "parse");
    }

    #[test]
    fn eof_is_classified() {
        let err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        match CanonError::from_parse(&err) {
            CanonError::Parse { category, .. } => assert_eq!(category, "eof"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_mentions_limit() {
        let e = CanonError::DepthExceeded { limit: 8 };
        assert!(e.to_string().contains("limit of 8"));
        assert!(!e.is_parse());
        assert_eq!(e.code(), "depth_exceeded");
    }
}
