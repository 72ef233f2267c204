/**
 * Authentication Handler Types
 *
 * Request and response bodies used by the auth handlers. Successful
 * responses are wrapped in `ApiResponse`; the types here are the `data`
 * payloads.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (checked against the policy, then hashed)
    pub password: String,
    /// Requested role: `user` or `admin`
    pub role: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response payload
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed bearer token
    pub bearer_access_token: String,
}

/// Query string of `GET /email-availability`
#[derive(Deserialize, Debug, Default)]
pub struct EmailAvailabilityQuery {
    pub email: Option<String>,
}
