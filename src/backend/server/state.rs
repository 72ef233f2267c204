/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # Thread Safety
 *
 * The state holds only read-mostly, process-wide values (the auth service
 * with its store handle and token secret), shared through `Arc` and never
 * mutated after startup.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Authentication flows with their injected store, hasher and issuer
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }
}

/// Lets handlers take `State<Arc<AuthService>>` directly
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
