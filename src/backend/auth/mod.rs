//! Authentication Module
//!
//! This module handles account creation, credential verification and bearer
//! token issuance.
//!
//! # Architecture
//!
//! - **`users`** - User model, roles, and the password-free projection
//! - **`store`** - Credential store port with PostgreSQL and in-memory backends
//! - **`passwords`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT claims, signing and verification
//! - **`service`** - Signup, login, availability and profile flows
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── store/          - Credential store implementations
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Authentication flows
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, password, role → validated → hashed → stored → user returned
//! 2. **Login**: email and password → credentials verified → bearer token returned
//! 3. **Profile**: bearer token → verified by middleware → user loaded → profile returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10 by default)
//! - Tokens are HS256 JWTs expiring after 7 days by default
//! - Invalid credentials return 401 without revealing which part was wrong
//! - Password hashes never appear in responses or logs

/// User data model
pub mod users;

/// Credential store port and implementations
pub mod store;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Authentication flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{email_availability, get_me, login, ping, signup};
pub use passwords::PasswordHasher;
pub use service::{AuthService, Registration};
pub use sessions::{Claims, TokenIssuer};
pub use store::{InMemoryUserStore, PgUserStore, StoreError, UserStore};
pub use users::{NewUser, PublicUser, Role, User, UserId};
