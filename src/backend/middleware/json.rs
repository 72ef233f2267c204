/**
 * Request Extraction
 *
 * `ValidatedJson` and `ValidatedQuery` behave like `axum::Json` and
 * `axum::extract::Query` but reject unreadable input with a `BackendError`,
 * so a malformed request gets the same 400 envelope as any other
 * validation failure.
 */

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON body extractor whose rejection is a validation error
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::validation("body", rejection.body_text())
        })?;
        Ok(Self(value))
    }
}

/// Query string extractor whose rejection is a validation error
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await.map_err(|rejection| {
            tracing::warn!("Rejected query string: {}", rejection.body_text());
            BackendError::validation("query", rejection.body_text())
        })?;
        Ok(Self(value))
    }
}
