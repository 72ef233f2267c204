/**
 * Bearer Tokens
 *
 * This module handles JWT generation and validation. Tokens are signed with
 * HS256 using the server secret from configuration and carry the user's id
 * and role.
 */

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{decode, encode, get_current_timestamp, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{Role, UserId};
use crate::backend::error::BackendError;

/// Default token lifetime: 7 days
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// JWT claims structure
///
/// `role` is copied from the user when the token is issued and is not
/// re-read on later requests; a role change applies from the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub subject: UserId,
    /// Role at issuance
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signs and verifies bearer tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            ttl,
        }
    }

    /// Create a token for a user, expiring `ttl` from now
    pub fn issue(&self, subject: UserId, role: Role) -> Result<String, BackendError> {
        let now = get_current_timestamp();
        let exp = now
            .checked_add(self.ttl.as_secs())
            .ok_or_else(|| BackendError::internal("token expiry overflows"))?;
        let claims = Claims {
            subject,
            role,
            iat: now,
            exp,
        };
        self.sign(&claims)
    }

    /// Sign an arbitrary set of claims
    pub fn sign(&self, claims: &Claims) -> Result<String, BackendError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| BackendError::internal(format!("failed to sign token: {e}")))
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify(&self, token: &str) -> Result<Claims, BackendError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Token rejected: {}", e);
                BackendError::token("Invalid or expired token")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret", DEFAULT_TOKEN_TTL)
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();
        let token = issuer.issue(42, Role::Admin).unwrap();
        assert!(!token.is_empty());

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.subject, 42);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_expiry_overflow_is_error() {
        let issuer = TokenIssuer::new(b"test-secret", Duration::from_secs(u64::MAX));
        assert_matches!(issuer.issue(1, Role::User), Err(BackendError::Internal { .. }));
    }

    #[test]
    fn test_claim_names_on_the_wire() {
        let issuer = issuer();
        let claims = issuer.verify(&issuer.issue(1, Role::User).unwrap()).unwrap();
        let json = serde_json::to_value(claims).unwrap();
        assert_eq!(json["subject"], 1);
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_verify_invalid_token() {
        assert_matches!(issuer().verify("invalid.token.here"), Err(BackendError::TokenInvalid { .. }));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = issuer();
        let token = issuer.issue(1, Role::User).unwrap();

        // Swap in a payload claiming admin while keeping the original signature.
        let forged = issuer
            .sign(&Claims {
                subject: 1,
                role: Role::Admin,
                iat: 0,
                exp: u64::MAX / 2,
            })
            .unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        parts[1] = forged_payload;
        let tampered = parts.join(".");

        assert_matches!(issuer.verify(&tampered), Err(BackendError::TokenInvalid { .. }));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issuer().issue(1, Role::User).unwrap();
        let other = TokenIssuer::new(b"another-secret", DEFAULT_TOKEN_TTL);
        assert_matches!(other.verify(&token), Err(BackendError::TokenInvalid { .. }));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();
        let now = get_current_timestamp();
        let token = issuer
            .sign(&Claims {
                subject: 1,
                role: Role::User,
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert_matches!(issuer.verify(&token), Err(BackendError::TokenInvalid { .. }));
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", issuer());
        assert!(!debug.contains("test-secret"));
        assert!(debug.contains("ttl"));
    }
}
