//! Database connection settings: host mode (`POSTGRES_HOST`) or a full `DATABASE_URL`.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

pub const DEFAULT_DATABASE_NAME: &str = "heroes";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseSource {
    /// `postgres://{host}/{database}`; `ssl` requires TLS on the connection.
    Host {
        host: String,
        database: String,
        ssl: bool,
    },
    /// Connection string used verbatim, including any `sslmode` parameter.
    Url(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub source: DatabaseSource,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        match &self.source {
            DatabaseSource::Host { host, database, .. } => format!("postgres://{}/{}", host, database),
            DatabaseSource::Url(url) => url.clone(),
        }
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let opts = PgConnectOptions::from_str(&self.url())
            .map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?;
        Ok(match self.source {
            DatabaseSource::Host { ssl: true, .. } => opts.ssl_mode(PgSslMode::Require),
            _ => opts,
        })
    }
}

/// Interpret a flag the way operators usually write it in an environment file.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "require"
    )
}
