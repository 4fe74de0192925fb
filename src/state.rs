//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup and cloned into every handler. The pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
