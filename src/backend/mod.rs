//! Backend Module
//!
//! This module contains all server-side code for the authgate service: an
//! Axum HTTP server offering signup, email availability checks, login with
//! bearer tokens, and an authenticated profile endpoint.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, credential stores, hashing, tokens and handlers
//! - **`middleware`** - Bearer token verification and body extraction
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `authgate-server` binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! Handlers share `AppState`, which holds the auth service behind an `Arc`.
//! The credential store is either a PostgreSQL pool or an in-memory map
//! behind a `tokio::sync::RwLock`; bcrypt work runs on the blocking pool.
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result<_, BackendError>`. The error
//! implements `IntoResponse` and renders the standard JSON envelope with a
//! status code chosen per error kind.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
