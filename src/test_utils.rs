//! Shared helpers for tests.

use crate::migration::apply_migrations;
use crate::routes::build_router;
use crate::state::AppState;
use axum_test::TestServer;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub async fn setup_schema(pool: &PgPool) {
    apply_migrations(pool).await.expect("schema setup failed");
}

/// Full router over a migrated database. Static files come from an empty directory.
pub async fn create_test_app(pool: PgPool) -> TestServer {
    setup_schema(&pool).await;
    let public_dir = std::env::temp_dir().join(format!("courses-api-test-public-{}", std::process::id()));
    std::fs::create_dir_all(&public_dir).expect("create public dir");
    TestServer::new(build_router(AppState { pool }, public_dir)).expect("Failed to create test server")
}

/// State whose pool never connects; for routes that must not touch the database.
pub fn offline_state() -> AppState {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://offline@127.0.0.1:1/offline")
        .expect("lazy pool");
    AppState { pool }
}
