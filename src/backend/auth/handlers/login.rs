/**
 * Login Handler
 *
 * This module implements the credential-guarded handler for
 * POST /api/v1/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a bearer token carrying the user's id and role
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 with the same message
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::shared::ApiResponse;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or malformed body
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - credential store failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "user signed in successful",
///   "statusCode": 200,
///   "data": { "bearerAccessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." },
///   "time": "2024-06-01T12:00:00Z",
///   "success": true
/// }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, BackendError> {
    let bearer_access_token = auth.login(&request.email, &request.password).await?;

    Ok(Json(ApiResponse::ok(
        StatusCode::OK.as_u16(),
        "user signed in successful",
        LoginResponse { bearer_access_token },
    )))
}
