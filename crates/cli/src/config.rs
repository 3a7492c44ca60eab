//! Process configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.
//! Recognised keys:
//! - `MONGODB_URI`  connection string (required unless running in memory)
//! - `MONGODB_DB`   database name, default `jobsdb`
//! - `PORT`         listen port, default `8000`

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MONGODB_URI is not set")]
    MissingMongoUri,

    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongodb_uri: Option<String>,
    pub database: String,
    pub port: u16,
}

/// Load `.env` (silently ignored if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongodb_uri: get("MONGODB_URI"),
            database: get("MONGODB_DB").unwrap_or_else(|| db::pool::DEFAULT_DATABASE.to_string()),
            port,
        })
    }

    pub fn require_mongodb_uri(&self) -> Result<&str, ConfigError> {
        self.mongodb_uri.as_deref().ok_or(ConfigError::MissingMongoUri)
    }
}
