/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints under `/api/v1/auth`.
 *
 * # Routes
 *
 * - `GET /api/v1/auth/ping` - Liveness check
 * - `GET /api/v1/auth/email-availability?email=` - Email availability
 * - `POST /api/v1/auth/signup` - User registration
 * - `POST /api/v1/auth/login` - User login
 * - `GET /api/v1/auth/user` - Current user profile (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{email_availability, get_me, login, ping, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Prefix every auth endpoint is nested under
pub const AUTH_PREFIX: &str = "/api/v1/auth";

/// Configure API routes
///
/// The profile route sits behind `auth_middleware`, which rejects requests
/// without a valid bearer token before the handler runs. The remaining
/// routes are public; login checks credentials itself.
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/user", get(get_me))
        .route_layer(from_fn_with_state(state, auth_middleware));

    let public = Router::new()
        .route("/ping", get(ping))
        .route("/email-availability", get(email_availability))
        .route("/signup", post(signup))
        .route("/login", post(login));

    router.nest(AUTH_PREFIX, public.merge(protected))
}
