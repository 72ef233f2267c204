//! Database test fixtures and utilities
//!
//! PostgreSQL tests only run when `DATABASE_URL` is set; without it the
//! fixtures return `None` and the tests return early.

use sqlx::postgres::PgPoolOptions;

use authgate::backend::auth::PgUserStore;

/// Connect to the test database and run migrations, if one is configured
pub async fn create_test_store() -> Option<PgUserStore> {
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create test database pool");

    let store = PgUserStore::new(pool);
    store.migrate().await.expect("Failed to run migrations");
    Some(store)
}
