/**
 * User Model
 *
 * This module defines the user record, the closed set of roles, and the
 * password-free projection returned to clients.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Store-assigned user identifier
pub type UserId = i64;

/// Role carried on a user and copied into issued tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Wire and storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(SharedError::validation("role", "Role must be one of: user, admin")),
        }
    }
}

/// User record as held by the credential store
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. Convert to [`PublicUser`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: UserId,
    /// Normalized (lower-cased) email
    pub email: String,
    /// bcrypt hash including salt and cost
    pub password_hash: String,
    /// Role at the time of the last read
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Data needed to insert a user; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// User without the password field, safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
