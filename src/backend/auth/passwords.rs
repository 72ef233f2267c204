/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both operations are CPU-bound and run on
 * tokio's blocking thread pool so that a slow hash never stalls other
 * requests on the async executor.
 *
 * # Security
 *
 * - Every hash gets a fresh random salt, so equal passwords hash differently
 * - Verification uses bcrypt's own constant-time comparison
 * - A failed hash is an error; there is no fallback to a cheaper cost
 */

use crate::backend::error::BackendError;

/// Work factor used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh salt
    pub async fn hash(&self, password: &str) -> Result<String, BackendError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::internal(format!("hashing task failed: {e}")))?
            .map_err(|e| BackendError::internal(format!("failed to hash password: {e}")))
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch. A stored hash that bcrypt cannot
    /// parse is an error rather than a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, BackendError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| BackendError::internal(format!("verification task failed: {e}")))?
            .map_err(|e| BackendError::internal(format!("failed to verify password: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    // bcrypt's minimum cost keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(TEST_COST);
        let first = hasher.hash("Abcd123!").await.unwrap();
        let second = hasher.hash("Abcd123!").await.unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("Abcd123!", &first).await.unwrap());
        assert!(hasher.verify("Abcd123!", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_embeds_cost() {
        let hasher = PasswordHasher::new(TEST_COST);
        let hash = hasher.hash("Abcd123!").await.unwrap();
        assert!(hash.starts_with("$2b$04$"), "{hash}");
    }

    #[tokio::test]
    async fn test_default_cost() {
        let hash = PasswordHasher::default().hash("Abcd123!").await.unwrap();
        assert!(hash.starts_with("$2b$10$"), "{hash}");
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_verify() {
        let hasher = PasswordHasher::new(TEST_COST);
        let hash = hasher.hash("Abcd123!").await.unwrap();
        assert!(!hasher.verify("Abcd123?", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_error() {
        let hasher = PasswordHasher::new(TEST_COST);
        let result = hasher.verify("Abcd123!", "not-a-bcrypt-hash").await;
        assert_matches!(result, Err(BackendError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_invalid_cost_is_error() {
        let hasher = PasswordHasher::new(2);
        assert_matches!(hasher.hash("Abcd123!").await, Err(BackendError::Internal { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_hash_twice_differs_and_both_verify(password in "[ -~]{1,40}") {
            let hasher = PasswordHasher::new(TEST_COST);
            let (first, second, ok_first, ok_second) = tokio_test::block_on(async {
                let first = hasher.hash(&password).await.unwrap();
                let second = hasher.hash(&password).await.unwrap();
                let ok_first = hasher.verify(&password, &first).await.unwrap();
                let ok_second = hasher.verify(&password, &second).await.unwrap();
                (first, second, ok_first, ok_second)
            });

            prop_assert_ne!(first, second);
            prop_assert!(ok_first);
            prop_assert!(ok_second);
        }
    }
}
