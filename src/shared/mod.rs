//! Shared Module
//!
//! Types that do not depend on the HTTP server: input validation, the
//! response envelope and the errors they produce. Clients of the API can
//! use the same types to build requests and decode responses.

/// Shared error types
pub mod error;

/// Email and password validation
pub mod validation;

/// JSON response envelope
pub mod response;

pub use error::SharedError;
pub use response::ApiResponse;
pub use validation::{normalize_email, validate_email, validate_password};
