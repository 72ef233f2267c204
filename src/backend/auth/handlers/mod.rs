//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs           - Module exports and documentation
//! ├── types.rs         - Request and response types
//! ├── ping.rs          - Liveness check
//! ├── availability.rs  - Email availability check
//! ├── signup.rs        - User registration handler
//! ├── login.rs         - User authentication handler
//! └── me.rs            - Current user profile handler
//! ```
//!
//! # Handlers
//!
//! - **`ping`** - GET /api/v1/auth/ping
//! - **`email_availability`** - GET /api/v1/auth/email-availability?email=
//! - **`signup`** - POST /api/v1/auth/signup
//! - **`login`** - POST /api/v1/auth/login
//! - **`get_me`** - GET /api/v1/auth/user (bearer token required)
//!
//! Handlers stay thin: they extract the request, call `AuthService`, and
//! wrap the result in an `ApiResponse` envelope. Failures are returned as
//! `BackendError`, which renders its own envelope.

/// Request and response types
pub mod types;

/// Liveness check
pub mod ping;

/// Email availability handler
pub mod availability;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{EmailAvailabilityQuery, LoginRequest, LoginResponse, SignupRequest};

pub use availability::email_availability;
pub use login::login;
pub use me::get_me;
pub use ping::ping;
pub use signup::signup;
