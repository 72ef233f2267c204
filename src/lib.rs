//! authgate - Minimal Authentication Backend
//!
//! authgate is an HTTP service that lets clients create accounts, check
//! whether an email is free, log in to receive a signed bearer token, and
//! fetch the profile of the authenticated user.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the HTTP server
//!   - Response envelope
//!   - Email and password validation
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and middleware
//!   - bcrypt password hashing and JWT sessions
//!   - PostgreSQL and in-memory credential stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::BackendError` for everything a request can fail with;
//!   it renders as a JSON envelope with a matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
