//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that need
//! it. Nothing on a request path reads environment variables.

use crate::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_DB_NAME, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT,
    DEFAULT_UPLOAD_DIR,
};
use crate::error::{ConfigError, ConfigResult};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Connection settings for the document store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    uri: String,
    db_name: String,
    collection_name: String,
}

impl StoreConfig {
    pub fn new(
        uri: impl Into<String>,
        db_name: impl Into<String>,
        collection_name: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            db_name: db_name.into(),
            collection_name: collection_name.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }
}

/// Full application configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    port: u16,
    store: StoreConfig,
    upload_dir: PathBuf,
    max_upload_bytes: usize,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `MONGO_URI` is unset or empty,
    /// - `PORT` or `MAX_UPLOAD_BYTES` is not a valid number.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let uri = get("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?;
        let db_name = get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into());
        let collection_name =
            get("COLLECTION_NAME").unwrap_or_else(|| DEFAULT_COLLECTION_NAME.into());

        let upload_dir = get("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw.parse::<usize>().map_err(|_| ConfigError::Invalid {
                name: "MAX_UPLOAD_BYTES",
                expected: "byte count",
                value: raw,
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            port,
            store: StoreConfig::new(uri, db_name, collection_name),
            upload_dir,
            max_upload_bytes,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Address the HTTP server binds to: all interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
