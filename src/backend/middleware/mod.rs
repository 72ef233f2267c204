//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token verification and the `AuthUser` extractor
//! - **`json`** - JSON body and query string extraction with envelope-shaped rejections

pub mod auth;

pub mod json;

pub use auth::{auth_middleware, AuthUser};
pub use json::{ValidatedJson, ValidatedQuery};
