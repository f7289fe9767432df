// Server configuration
//
// Values come from LOOKER_EXPORT_* environment variables (a .env file is
// honoured), layered over an optional config file named by
// LOOKER_EXPORT_CONFIG, layered over built-in defaults.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of every environment variable the server reads
pub const ENV_PREFIX: &str = "LOOKER_EXPORT";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// 1MB
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the export backend; requests go to `<backend_url>/fetch_and_send`
    pub backend_url: String,

    /// Address the HTTP server listens on
    pub bind_addr: String,

    /// Directory holding the built front-end, served for non-API paths
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Directory for daily-rolling log files, in addition to stdout
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Maximum accepted request body size
    pub body_limit_bytes: usize,

    /// Overall timeout for the backend call; transport defaults when unset
    #[serde(default)]
    pub upstream_timeout_secs: Option<u64>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid bind address {addr:?}: {source}")]
    BindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: None,
            log_dir: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            upstream_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var(format!("{}_CONFIG", ENV_PREFIX))
            .ok()
            .map(PathBuf::from);
        let env = config::Environment::with_prefix(ENV_PREFIX).try_parsing(true);
        Self::from_sources(file.as_deref(), env)
    }

    /// Build configuration from an optional file and an environment source
    pub fn from_sources(
        file: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("body_limit_bytes", DEFAULT_BODY_LIMIT_BYTES as i64)?;
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let cfg: Self = builder.add_source(env).build()?.try_deserialize()?;
        cfg.socket_addr()?;
        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}
