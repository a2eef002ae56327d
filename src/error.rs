//! All error types for the mcrename crate.
//!
//! Rewriting itself never fails; these come from I/O, table loading and rule compilation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unknown_direction_error() {
        let error = Error::UnknownDirection("--to_quilt".to_string());
        assert_eq!(error.to_string(), "unknown direction `--to_quilt`");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_regex_error() {
        let regex_error = regex::Regex::new("(").unwrap_err();
        let error = Error::from(regex_error);
        assert!(error.to_string().starts_with("invalid pattern"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_unsupported_format_error() {
        let error = Error::UnsupportedFormat("xyz".to_string());
        assert_eq!(error.to_string(), "unsupported format: xyz");
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("duplicate forge name `Foo`");
        assert_eq!(
            error.to_string(),
            "validation error: duplicate forge name `Foo`"
        );
    }
}
