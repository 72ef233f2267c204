/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return it directly.
 * The error becomes a failure envelope carrying the mapped status code:
 *
 * ```json
 * {
 *   "message": "Email already registered",
 *   "statusCode": 409,
 *   "data": null,
 *   "time": "2024-06-01T12:00:00Z",
 *   "success": false
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body: ApiResponse<()> = ApiResponse::failure(status.as_u16(), self.message());
        (status, Json(body)).into_response()
    }
}
