/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the authentication backend.
 * Every failure a flow can produce is one of these variants, and each maps
 * to exactly one HTTP status code.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `ValidationFailed` - malformed email, password policy violation, bad body
 * - `EmailAlreadyExists` - the email is registered (pre-check or constraint)
 * - `InvalidCredentials` - unknown email or wrong password (indistinguishable)
 * - `TokenInvalid` - missing, malformed, tampered or expired bearer token
 * - `UserNotFound` - a valid token refers to an account that no longer exists
 *
 * ## Server Errors
 *
 * - `StoreUnavailable` - the credential store failed; never retried
 * - `Internal` - hashing or signing failed
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::store::StoreError;
use crate::shared::SharedError;

/// Message shared by both "no such email" and "wrong password"
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use authgate::backend::error::BackendError;
///
/// let err = BackendError::validation("email", "Invalid email format");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A request field failed validation
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed {
        /// The offending field
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The email is already registered
    #[error("Email already registered")]
    EmailAlreadyExists,

    /// Login failed; does not reveal whether the email exists
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// The authenticated subject no longer exists
    #[error("User not found")]
    UserNotFound,

    /// The credential store could not serve the request
    #[error("Credential store unavailable: {message}")]
    StoreUnavailable {
        /// Detail for the log; not sent to clients
        message: String,
    },

    /// Bearer token missing, malformed, tampered with or expired
    #[error("Invalid token: {message}")]
    TokenInvalid {
        /// Human-readable error message
        message: String,
    },

    /// Hashing or token signing failed
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the log; not sent to clients
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new store-unavailable error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Create a new token error
    pub fn token(message: impl Into<String>) -> Self {
        Self::TokenInvalid {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationFailed` - 400 Bad Request
    /// - `InvalidCredentials`, `TokenInvalid` - 401 Unauthorized
    /// - `UserNotFound` - 404 Not Found
    /// - `EmailAlreadyExists` - 409 Conflict
    /// - `Internal` - 500 Internal Server Error
    /// - `StoreUnavailable` - 503 Service Unavailable
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::TokenInvalid { .. } => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side failures return a generic message; their detail stays in
    /// the `Display` output for logging.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationFailed { message, .. } => message.clone(),
            Self::TokenInvalid { message } => message.clone(),
            Self::StoreUnavailable { .. } => "Service temporarily unavailable".to_string(),
            Self::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        let SharedError::ValidationError { field, message } = err;
        Self::ValidationFailed { field, message }
    }
}

impl From<StoreError> for BackendError {
    /// The only unique key in the store is the email column.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => Self::EmailAlreadyExists,
            StoreError::Unavailable(message) => Self::StoreUnavailable { message },
        }
    }
}
