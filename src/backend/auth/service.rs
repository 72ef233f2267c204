/**
 * Authentication Service
 *
 * The signup, login, email-availability and profile flows. The service owns
 * its collaborators (credential store, password hasher, token issuer), which
 * are injected through `AuthService::new`.
 *
 * # Email Uniqueness
 *
 * Signup checks whether the email is taken before hashing, but that check
 * races with concurrent signups. The store's unique constraint is what
 * actually guarantees uniqueness; a `DuplicateKey` from `insert` is reported
 * as the same `EmailAlreadyExists` error as the pre-check.
 */

use std::sync::Arc;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::{Claims, TokenIssuer};
use crate::backend::auth::store::{StoreError, UserStore};
use crate::backend::auth::users::{NewUser, PublicUser, Role, User};
use crate::backend::error::BackendError;
use crate::shared::{normalize_email, validate_email, validate_password, SharedError};

/// Account creation input, already parsed from the request
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Authentication flows over an injected store, hasher and token issuer
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self { store, hasher, tokens }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Report whether an email can still be registered
    ///
    /// Advisory only; signup re-checks at insert time.
    pub async fn check_email_availability(&self, email: &str) -> Result<bool, BackendError> {
        validate_email(email)?;
        let email = normalize_email(email);
        tracing::info!("Checking email availability for {}", email);

        if self.find_by_email(&email).await?.is_some() {
            tracing::warn!("Email already registered: {}", email);
            return Err(BackendError::EmailAlreadyExists);
        }
        Ok(true)
    }

    /// Create an account and return it without the password field
    pub async fn signup(&self, registration: Registration) -> Result<PublicUser, BackendError> {
        validate_email(&registration.email)?;
        validate_password(&registration.password)?;
        let email = normalize_email(&registration.email);
        tracing::info!("Registering new user for {}", email);

        if self.find_by_email(&email).await?.is_some() {
            tracing::warn!("Email already registered: {}", email);
            return Err(BackendError::EmailAlreadyExists);
        }

        let password_hash = self.hasher.hash(&registration.password).await?;

        let user = self
            .store
            .insert(NewUser {
                email: email.clone(),
                password_hash,
                role: registration.role,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey => {
                    tracing::warn!("Concurrent signup lost the race for {}", email);
                    BackendError::EmailAlreadyExists
                }
                other => {
                    tracing::error!("Failed to create user {}: {}", email, other);
                    BackendError::from(other)
                }
            })?;

        tracing::info!("User created successfully: {} (id {})", user.email, user.id);
        Ok(user.into())
    }

    /// Verify credentials and issue a bearer token
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, BackendError> {
        if email.trim().is_empty() {
            return Err(SharedError::validation("email", "Email is required").into());
        }
        if password.is_empty() {
            return Err(SharedError::validation("password", "Password is required").into());
        }
        let email = normalize_email(email);
        tracing::info!("Validating user {}", email);

        let Some(user) = self.find_by_email(&email).await? else {
            tracing::warn!("Login failed for {}: unknown email", email);
            return Err(BackendError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::warn!("Login failed for {}: wrong password", email);
            return Err(BackendError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, user.role)?;
        tracing::info!("User signed in: {} (id {})", user.email, user.id);
        Ok(token)
    }

    /// Load the profile of the user named by verified claims
    pub async fn fetch_profile(&self, claims: &Claims) -> Result<PublicUser, BackendError> {
        let user = self
            .store
            .find_by_id(claims.subject)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load user {}: {}", claims.subject, e);
                BackendError::from(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", claims.subject);
                BackendError::UserNotFound
            })?;

        Ok(user.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, BackendError> {
        self.store.find_by_email(email).await.map_err(|e| {
            tracing::error!("Failed to look up {}: {}", email, e);
            BackendError::from(e)
        })
    }
}
