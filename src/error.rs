//! Error handling module for ordertui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for ordertui
#[derive(Error, Debug)]
pub enum OrderTuiError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (missing environment values, bad catalog files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (user input, draft order files)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Spreadsheet submission errors (auth, network, API)
    #[error("Submission error: {0}")]
    Submission(String),

    /// Confirmation email errors (never fatal to a submission)
    #[error("Email error: {0}")]
    Email(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for ordertui operations
pub type Result<T> = std::result::Result<T, OrderTuiError>;

// Convenient error constructors
impl OrderTuiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a submission error
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    /// Create an email error
    pub fn email(msg: impl Into<String>) -> Self {
        Self::Email(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> OrderTuiError {
    OrderTuiError::General(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrderTuiError::config("GOOGLE_SHEET_ID is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: GOOGLE_SHEET_ID is not set"
        );

        let err = OrderTuiError::validation("name is required");
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OrderTuiError = io_err.into();
        assert!(matches!(err, OrderTuiError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = OrderTuiError::submission("append failed");
        assert!(matches!(err, OrderTuiError::Submission(_)));

        let err = OrderTuiError::email("relay refused");
        assert!(matches!(err, OrderTuiError::Email(_)));
    }
}
