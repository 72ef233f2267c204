//! Credential Store
//!
//! The `UserStore` trait is the persistence port used by the auth service.
//! Email uniqueness is enforced here: `insert` fails with
//! [`StoreError::DuplicateKey`] whenever the email is already taken, even if
//! the caller's own pre-check saw it as free.
//!
//! # Implementations
//!
//! - **`PgUserStore`** - PostgreSQL via sqlx, backed by a `UNIQUE` constraint
//! - **`InMemoryUserStore`** - process-local map, used without `DATABASE_URL`
//!   and in tests

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::{NewUser, User, UserId};

/// In-memory store implementation
pub mod memory;

/// PostgreSQL store implementation
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// Errors produced by a credential store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique constraint (the email) was violated
    #[error("duplicate key")]
    DuplicateKey,

    /// The store failed for any other reason
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence port for user records
///
/// Emails passed in are expected to be normalized already.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look a user up by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Persist a new user, assigning its id
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Remove a user; returns whether a record was deleted
    async fn delete(&self, id: UserId) -> Result<bool, StoreError>;
}
