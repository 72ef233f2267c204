/**
 * Ping Handler
 *
 * Liveness check for GET /api/v1/auth/ping.
 */

use axum::{http::StatusCode, response::Json};

use crate::shared::ApiResponse;

/// Report that the server is up
pub async fn ping() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(StatusCode::OK.as_u16(), "Server is up", ())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        let (status, Json(body)) = ping().await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.message, "Server is up");
    }
}
