//! Runtime configuration read from environment variables (after loading `.env`).

pub mod database;

pub use database::{DatabaseConfig, DatabaseSource};

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Root for `GET /{filename}`.
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => database::DEFAULT_MAX_CONNECTIONS,
        };

        let source = match get("POSTGRES_HOST") {
            Some(host) => DatabaseSource::Host {
                host,
                database: get("POSTGRES_DB").unwrap_or_else(|| database::DEFAULT_DATABASE_NAME.into()),
                ssl: get("POSTGRES_SSL").map(|v| database::parse_flag(&v)).unwrap_or(false),
            },
            None => DatabaseSource::Url(get("DATABASE_URL").ok_or(ConfigError::MissingDatabase)?),
        };

        Ok(Config {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            database: DatabaseConfig {
                source,
                max_connections,
            },
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
