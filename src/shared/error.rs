//! Shared Error Types
//!
//! This module defines error types produced by code that is independent of
//! the HTTP server, such as input validation.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//!
//! # Usage
//!
//! ```rust
//! use authgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
use thiserror::Error;

/// Errors that can occur outside the HTTP layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        let SharedError::ValidationError { field, message } = error;
        assert_eq!(field, "email");
        assert_eq!(message, "Invalid email format");
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("password", "too short");
        let display = format!("{}", error);
        assert!(display.contains("password"));
        assert!(display.contains("too short"));
    }
}
