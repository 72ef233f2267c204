//! Authentication test helpers
//!
//! Provides utilities for building a test server, creating users through
//! the API, and logging them in.

use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use authgate::backend::routes::AUTH_PREFIX;
use authgate::backend::server::{create_app, ServerConfig};

/// Secret used to sign tokens in tests
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A password that satisfies the password policy
pub const TEST_PASSWORD: &str = "Abcd123!";

/// Base path of every auth endpoint
pub const AUTH: &str = AUTH_PREFIX;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Configuration with the in-memory store and a cheap bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test configuration")
}

/// Create a test server over a fresh in-memory store
pub async fn create_test_server() -> TestServer {
    let app = create_app(&test_config())
        .await
        .expect("Failed to create test app");
    TestServer::new(app).expect("Failed to start test server")
}

/// Generate an email no other test uses
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

/// Sign up through the API and return the response body
pub async fn signup(server: &TestServer, email: &str, password: &str, role: &str) -> Value {
    server
        .post(&format!("{AUTH}/signup"))
        .json(&json!({ "email": email, "password": password, "role": role }))
        .await
        .json()
}

/// Log in through the API and return the bearer token
pub async fn login_token(server: &TestServer, email: &str, password: &str) -> String {
    let body: Value = server
        .post(&format!("{AUTH}/login"))
        .json(&json!({ "email": email, "password": password }))
        .await
        .json();
    body["data"]["bearerAccessToken"]
        .as_str()
        .expect("Login response did not contain a token")
        .to_string()
}

/// Create a user and log them in
pub async fn create_test_user(server: &TestServer, email: &str, password: &str) -> TestUser {
    let body = signup(server, email, password, "user").await;
    let id = body["data"]["id"].as_i64().expect("Signup response did not contain an id");
    let token = login_token(server, email, password).await;

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    create_test_user(server, &unique_email(), TEST_PASSWORD).await
}
