/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the credential store (PostgreSQL or in-memory)
 * 2. Build the auth service from the configured hasher and token issuer
 * 3. Create the router with all routes and layers
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::UserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Assemble application state around an already-built store
pub fn build_state(config: &ServerConfig, store: Arc<dyn UserStore>) -> AppState {
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let tokens = TokenIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl);
    AppState::new(Arc::new(AuthService::new(store, hasher, tokens)))
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when `DATABASE_URL` is set but the database cannot be reached or
/// migrated. Without `DATABASE_URL` the in-memory store is used.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing authgate backend server");

    let store = load_store(config).await?;
    let app_state = build_state(config, store);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
