/**
 * In-Memory Credential Store
 *
 * Keeps users in a map guarded by a single `RwLock`. The duplicate check and
 * the insert happen under the same write lock, so concurrent inserts of one
 * email cannot both succeed.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::store::{StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct Inner {
    next_id: UserId,
    users: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
}

/// Process-local user store
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.by_email.contains_key(&user.email) {
            return Err(StoreError::DuplicateKey);
        }

        inner.next_id += 1;
        let record = User {
            id: inner.next_id,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        inner.by_email.insert(record.email.clone(), record.id);
        inner.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: UserId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.users.remove(&id) {
            Some(user) => {
                inner.by_email.remove(&user.email);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
