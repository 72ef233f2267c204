/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/v1/auth/user, which
 * returns the profile of the authenticated user.
 *
 * The route sits behind `auth_middleware`, so by the time this handler runs
 * the bearer token has been verified and its claims are available through
 * the `AuthUser` extractor.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::PublicUser;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::ApiResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token (rejected by the middleware)
/// * `404 Not Found` - the token's subject no longer exists
/// * `503 Service Unavailable` - credential store failure
pub async fn get_me(
    State(auth): State<Arc<AuthService>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ApiResponse<PublicUser>>, BackendError> {
    let user = auth.fetch_profile(&claims).await?;
    Ok(Json(ApiResponse::ok(StatusCode::OK.as_u16(), "Profile fetched success", user)))
}
