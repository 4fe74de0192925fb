//! Schema setup, run once before the server accepts connections.
//!
//! Persistent tables (course, request, payment) evolve through the versioned, additive
//! migrations under `migrations/`. Ephemeral tables are dropped and recreated on every
//! boot, so their rows never outlive the process.

use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// A table whose contents are discarded at startup.
pub struct EphemeralTable {
    pub name: &'static str,
    pub ddl: &'static str,
}

pub const EPHEMERAL_TABLES: &[EphemeralTable] = &[EphemeralTable {
    name: "hero",
    ddl: r#"
        CREATE TABLE hero (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            power TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#,
}];

/// Tables whose rows survive restarts; shape changes only ever arrive as new migrations.
pub const PERSISTENT_TABLES: &[&str] = &["course", "request", "payment"];

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Run pending versioned migrations, then rebuild every ephemeral table.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(tables = ?PERSISTENT_TABLES, "versioned migrations applied");
    reset_ephemeral_tables(pool).await
}

/// Drop and recreate ephemeral tables in one transaction.
pub async fn reset_ephemeral_tables(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for table in EPHEMERAL_TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", quote(table.name)))
            .execute(&mut *tx)
            .await?;
        sqlx::query(table.ddl).execute(&mut *tx).await?;
        tracing::info!(table = table.name, "ephemeral table recreated");
    }
    tx.commit().await?;
    Ok(())
}
