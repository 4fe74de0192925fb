//! Connection pool construction and the startup connectivity check.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the pool and verify the server answers. Any failure here is fatal for startup.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let options = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    authenticate(&pool).await?;
    tracing::info!(max_connections = config.max_connections, "postgres is running");
    Ok(pool)
}

pub async fn authenticate(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
