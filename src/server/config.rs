//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;
use tracing::warn;
use url::Url;

/// Default privileged code for local development only.
const DEV_SPECIAL_CODE: &str = "669";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("FILEHUB_BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
    #[error("FILEHUB_STORAGE_BASE_URL must be set to the object-storage host")]
    MissingStorageBaseUrl,
    #[error("FILEHUB_STORAGE_BASE_URL is not a valid URL: {0}")]
    InvalidStorageBaseUrl(String),
    #[error("FILEHUB_SPECIAL_CODE must be set in release builds")]
    MissingSpecialCode,
}

/// Configuration for the HTTP server and its adapters.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub storage_base_url: Url,
    pub special_code: String,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or does
    /// not parse. `FILEHUB_SPECIAL_CODE` falls back to a development value in
    /// debug builds only.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let bind_addr = env::var("FILEHUB_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let storage_base_url =
            env::var("FILEHUB_STORAGE_BASE_URL").map_err(|_| ConfigError::MissingStorageBaseUrl)?;
        let storage_base_url = Url::parse(&storage_base_url)
            .map_err(|_| ConfigError::InvalidStorageBaseUrl(storage_base_url))?;

        let special_code = match env::var("FILEHUB_SPECIAL_CODE") {
            Ok(code) => code,
            Err(_) if cfg!(debug_assertions) => {
                warn!("FILEHUB_SPECIAL_CODE not set, using development code");
                DEV_SPECIAL_CODE.into()
            }
            Err(_) => return Err(ConfigError::MissingSpecialCode),
        };

        Ok(Self {
            bind_addr,
            database_url,
            storage_base_url,
            special_code,
        })
    }
}
