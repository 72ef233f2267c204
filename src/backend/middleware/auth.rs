/**
 * Authentication Middleware
 *
 * This module protects routes that require a bearer token. The middleware
 * extracts the token from the Authorization header, verifies its signature
 * and expiry, and attaches the decoded claims to the request extensions.
 * Handlers read them back with the `AuthUser` extractor.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::Claims;
use crate::backend::error::BackendError;

/// Pull the token out of an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::token("Missing bearer token")
        })?;

    match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => {
            tracing::warn!("Invalid Authorization header format");
            Err(BackendError::token("Authorization header must use the Bearer scheme"))
        }
    }
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches the claims to the request extensions
///
/// Returns 401 if the token is missing or invalid. Whether the subject
/// still exists is left to the handler, which answers 404 in that case.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let claims = auth.tokens().verify(bearer_token(request.headers())?)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Axum extractor for the verified claims of the current request
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("Claims not found in request extensions");
                BackendError::token("Missing bearer token")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::test_support::test_service;
    use crate::backend::auth::users::Role;
    use crate::backend::server::state::AppState;
    use assert_matches::assert_matches;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token(&headers("bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn test_bearer_token_rejections() {
        assert_matches!(bearer_token(&HeaderMap::new()), Err(BackendError::TokenInvalid { .. }));
        assert_matches!(bearer_token(&headers("Basic dXNlcjpwYXNz")), Err(BackendError::TokenInvalid { .. }));
        assert_matches!(bearer_token(&headers("Bearer ")), Err(BackendError::TokenInvalid { .. }));
        assert_matches!(bearer_token(&headers("token")), Err(BackendError::TokenInvalid { .. }));
    }

    async fn whoami(AuthUser(claims): AuthUser) -> String {
        claims.subject.to_string()
    }

    fn protected_app(state: AppState) -> Router {
        Router::new()
            .route("/protected", get(whoami))
            .route_layer(axum::middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let auth = test_service();
        let token = auth.tokens().issue(5, Role::User).unwrap();
        let app = protected_app(AppState::new(auth));

        let response = app.oneshot(request(Some(&format!("Bearer {token}")))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"5");
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let app = protected_app(AppState::new(test_service()));
        let response = app.oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        let app = protected_app(AppState::new(test_service()));
        let response = app.oneshot(request(Some("Bearer invalid_token"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware() {
        let (mut parts, _) = Request::new(Body::empty()).into_parts();
        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert_matches!(result, Err(BackendError::TokenInvalid { .. }));
    }
}
