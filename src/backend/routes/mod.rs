//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback and layers
//! └── api_routes.rs   - Authentication endpoints
//! ```
//!
//! # Routes
//!
//! All endpoints live under `/api/v1/auth`:
//!
//! - `GET /ping` - Liveness check
//! - `GET /email-availability?email=` - Whether an email can be registered
//! - `POST /signup` - User registration
//! - `POST /login` - User login, returns a bearer token
//! - `GET /user` - Current user profile (bearer token required)

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use api_routes::AUTH_PREFIX;
pub use router::create_router;
