// tests/support/helpers.rs
use super::mocks::{ManualClock, StubPasswordHasher};
use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use events_booking::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use events_booking::application::services::ApplicationServices;
use events_booking::infrastructure::{
    database,
    repositories::{
        SqliteEventReadRepository, SqliteEventWriteRepository, SqliteRegistrationRepository,
        SqliteUserRepository,
    },
    security::token::{ExpiryPolicy, JwtTokenManager},
};
use events_booking::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, sync::Arc, time::Duration};

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";
pub const TEST_TTL: Duration = Duration::from_secs(3600);

/// Wiring with real SQLite repositories and a real token manager, a stub
/// hasher and a clock the test controls.
pub struct TestApp {
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
    pub tokens: Arc<JwtTokenManager>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

/// Single-connection in-memory database; every connection to `:memory:` is a
/// fresh database, so the pool must never open a second one.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("memory url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn build_test_app() -> TestApp {
    build_test_app_with(Arc::new(StubPasswordHasher), ExpiryPolicy::Strict).await
}

pub async fn build_test_app_with(
    password_hasher: Arc<dyn PasswordHasher>,
    policy: ExpiryPolicy,
) -> TestApp {
    let pool = test_pool().await;
    let clock = Arc::new(ManualClock::new());
    let clock_port: Arc<dyn Clock> = clock.clone();

    let tokens = Arc::new(
        JwtTokenManager::new(TEST_SECRET, TEST_TTL, policy, clock_port).expect("token manager"),
    );
    let token_port: Arc<dyn TokenManager> = tokens.clone();

    let services = Arc::new(ApplicationServices::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteEventWriteRepository::new(pool.clone())),
        Arc::new(SqliteEventReadRepository::new(pool.clone())),
        Arc::new(SqliteRegistrationRepository::new(pool.clone())),
        password_hasher,
        token_port,
    ));

    TestApp {
        pool,
        services,
        tokens,
        clock,
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert an `{error, message}` body with the given status and reason phrase.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    let error = json.get("error").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(error, expected_error, "unexpected error field: {error}");
    assert!(!message.is_empty(), "expected non-empty message field");
}
