//! Course enrollment REST backend over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use openapi::ApiDoc;
pub use routes::build_router;
pub use state::AppState;
