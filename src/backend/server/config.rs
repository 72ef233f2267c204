/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * builds the credential store it describes.
 *
 * # Configuration Sources
 *
 * | Variable                   | Default  | Meaning                              |
 * |----------------------------|----------|--------------------------------------|
 * | `JWT_SECRET`               | required | HMAC secret for bearer tokens        |
 * | `JWT_EXPIRES_IN_SECS`      | 604800   | Token lifetime, at most one year     |
 * | `BCRYPT_COST`              | 10       | bcrypt work factor (4..=31)          |
 * | `DATABASE_URL`             | unset    | PostgreSQL URL; unset means in-memory|
 * | `DATABASE_MAX_CONNECTIONS` | 5        | Connection pool size                 |
 * | `SERVER_PORT`              | 3000     | Listen port                          |
 *
 * # Error Handling
 *
 * A missing secret or an unparsable number is a startup error. A configured
 * database that cannot be reached or migrated is also a startup error; only
 * an unset `DATABASE_URL` selects the in-memory store.
 */

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::backend::auth::passwords::DEFAULT_BCRYPT_COST;
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL;
use crate::backend::auth::store::{InMemoryUserStore, PgUserStore, UserStore};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;
const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub port: u16,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("database_max_connections", &self.database_max_connections)
            .field("port", &self.port)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let mut builder = Self::builder().jwt_secret(jwt_secret);

        if let Some(secs) = parse_var::<u64>(&lookup, "JWT_EXPIRES_IN_SECS")? {
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(cost) = parse_var::<u32>(&lookup, "BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(max) = parse_var::<u32>(&lookup, "DATABASE_MAX_CONNECTIONS")? {
            builder = builder.database_max_connections(max);
        }
        if let Some(port) = parse_var::<u16>(&lookup, "SERVER_PORT")? {
            builder = builder.port(port);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl.is_zero() || self.token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRES_IN_SECS",
                value: self.token_ttl.as_secs().to_string(),
            });
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value })
        })
        .transpose()
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Duration,
    bcrypt_cost: u32,
    database_url: Option<String>,
    database_max_connections: u32,
    port: u16,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: DEFAULT_TOKEN_TTL,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn database_max_connections(mut self, max: u32) -> Self {
        self.database_max_connections = max;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl,
            bcrypt_cost: self.bcrypt_cost,
            database_url: self.database_url,
            database_max_connections: self.database_max_connections,
            port: self.port,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Build the credential store described by the configuration
///
/// With `DATABASE_URL` set this connects to PostgreSQL and runs the
/// migrations; otherwise it falls back to the in-memory store.
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, ConfigError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using in-memory credential store; accounts will not survive a restart.");
        return Ok(Arc::new(InMemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .inspect_err(|e| tracing::error!("Failed to create database connection pool: {:?}", e))?;
    tracing::info!("Database connection pool created successfully");

    let store = PgUserStore::new(pool);
    tracing::info!("Running database migrations...");
    store
        .migrate()
        .await
        .inspect_err(|e| tracing::error!("Failed to run database migrations: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(store))
}
