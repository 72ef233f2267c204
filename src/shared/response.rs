//! Response envelope
//!
//! Every API response, success or failure, is wrapped in the same JSON
//! shape:
//!
//! ```json
//! {
//!   "message": "user created",
//!   "statusCode": 201,
//!   "data": { "id": 1, "email": "u@x.com", "role": "user", "createdAt": "..." },
//!   "time": "2024-06-01T12:00:00Z",
//!   "success": true
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON envelope wrapping every API payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Human-readable outcome
    pub message: String,
    /// HTTP status code mirrored into the body
    pub status_code: u16,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// When the envelope was built
    pub time: DateTime<Utc>,
    /// Whether the request succeeded
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`
    pub fn ok(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status_code,
            data: Some(data),
            time: Utc::now(),
            success: true,
        }
    }

    /// Failure envelope with no payload
    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            data: None,
            time: Utc::now(),
            success: false,
        }
    }
}
