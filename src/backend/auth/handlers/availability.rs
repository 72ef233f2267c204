/**
 * Email Availability Handler
 *
 * GET /api/v1/auth/email-availability?email=
 *
 * Advisory check used by signup forms. A `true` answer does not reserve the
 * email; signup can still fail with 409 if someone else registers first.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::EmailAvailabilityQuery;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedQuery;
use crate::shared::ApiResponse;

/// Check whether an email is free to register
///
/// # Errors
///
/// * `400 Bad Request` - missing or malformed email
/// * `409 Conflict` - email already registered
/// * `503 Service Unavailable` - credential store failure
pub async fn email_availability(
    State(auth): State<Arc<AuthService>>,
    ValidatedQuery(query): ValidatedQuery<EmailAvailabilityQuery>,
) -> Result<Json<ApiResponse<bool>>, BackendError> {
    let email = query
        .email
        .ok_or_else(|| BackendError::validation("email", "Email is required"))?;

    let available = auth.check_email_availability(&email).await?;
    Ok(Json(ApiResponse::ok(StatusCode::OK.as_u16(), "Email available", available)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::service::Registration;
    use crate::backend::auth::test_support::test_service;
    use crate::backend::auth::users::Role;
    use assert_matches::assert_matches;

    fn query(email: Option<&str>) -> ValidatedQuery<EmailAvailabilityQuery> {
        ValidatedQuery(EmailAvailabilityQuery {
            email: email.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_available_email() {
        let Json(body) = email_availability(State(test_service()), query(Some("free@x.com")))
            .await
            .unwrap();
        assert_eq!(body.data, Some(true));
        assert_eq!(body.status_code, 200);
    }

    #[tokio::test]
    async fn test_taken_email() {
        let auth = test_service();
        auth.signup(Registration {
            email: "taken@x.com".to_string(),
            password: "Abcd123!".to_string(),
            role: Role::User,
        })
        .await
        .unwrap();

        let result = email_availability(State(auth), query(Some("taken@x.com"))).await;
        assert_matches!(result, Err(BackendError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_missing_email() {
        let result = email_availability(State(test_service()), query(None)).await;
        assert_matches!(result, Err(BackendError::ValidationFailed { .. }));
    }
}
