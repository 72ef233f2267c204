/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/auth/signup.
 *
 * # Registration Process
 *
 * 1. Parse the requested role
 * 2. Validate email format and password policy
 * 3. Check if the email is already registered
 * 4. Hash password using bcrypt
 * 5. Create user in the credential store
 * 6. Return the user without its password field
 *
 * No token is issued here; clients log in after signing up.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::service::{AuthService, Registration};
use crate::backend::auth::users::{PublicUser, Role};
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::shared::ApiResponse;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email, weak password, unknown role or bad body
/// * `409 Conflict` - email already registered
/// * `503 Service Unavailable` - credential store failure
///
/// # Example Request
///
/// ```http
/// POST /api/v1/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "u@x.com", "password": "Abcd123!", "role": "user" }
/// ```
pub async fn signup(
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PublicUser>>), BackendError> {
    let role = request.role.parse::<Role>()?;

    let user = auth
        .signup(Registration {
            email: request.email,
            password: request.password,
            role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(StatusCode::CREATED.as_u16(), "user created", user)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::test_support::test_service;
    use assert_matches::assert_matches;

    fn request(email: &str, password: &str, role: &str) -> ValidatedJson<SignupRequest> {
        ValidatedJson(SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        })
    }

    #[tokio::test]
    async fn test_signup_success() {
        let (status, Json(body)) = signup(State(test_service()), request("u@x.com", "Abcd123!", "user"))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.status_code, 201);
        let user = body.data.unwrap();
        assert_eq!(user.email, "u@x.com");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_signup_unknown_role() {
        let result = signup(State(test_service()), request("u@x.com", "Abcd123!", "root")).await;
        assert_matches!(result, Err(BackendError::ValidationFailed { field, .. }) if field == "role");
    }

    #[tokio::test]
    async fn test_signup_weak_password() {
        let result = signup(State(test_service()), request("u@x.com", "password", "user")).await;
        assert_matches!(result, Err(BackendError::ValidationFailed { field, .. }) if field == "password");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let auth = test_service();
        signup(State(auth.clone()), request("dup@x.com", "Abcd123!", "user"))
            .await
            .unwrap();

        let result = signup(State(auth), request("dup@x.com", "Abcd123!", "admin")).await;
        assert_matches!(result, Err(BackendError::EmailAlreadyExists));
    }
}
