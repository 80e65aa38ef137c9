//! Core error types

use thiserror::Error;

/// Errors raised while turning a single document into labeled tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The markup is not well-formed XML
    #[error("malformed markup at byte {position}: {message}")]
    Markup {
        /// Byte offset reported by the XML reader
        position: u64,
        /// Reader diagnostic
        message: String,
    },

    /// Element names or text were not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_error_display() {
        let error = CoreError::Markup {
            position: 42,
            message: "expecting </title>".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "malformed markup at byte 42: expecting </title>"
        );
    }

    #[test]
    fn test_encoding_error_display() {
        let error = CoreError::Encoding("invalid utf-8 sequence".to_string());
        assert!(error.to_string().starts_with("encoding error:"));
    }
}
