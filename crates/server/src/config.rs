use anyhow::Context;
use matcher::MatcherConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB (try-on uploads carry a base64 photo)
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable permissive CORS for browser frontends
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Results returned by `/ai/search` when the request has no `limit`
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,

    /// Upper bound on `limit` for a single search
    #[serde(default = "default_max_search_limit")]
    pub max_limit: usize,

    /// JSON catalog to serve; the built-in sample catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            default_limit: default_search_limit(),
            max_limit: default_max_search_limit(),
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server.*` file and
    /// `APEX_SERVER__*` environment variables. A bare `PORT` variable wins
    /// over everything else.
    pub fn load() -> anyhow::Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("APEX_SERVER").separator("__"));

        let mut config: ServerConfig = builder
            .build()?
            .try_deserialize()
            .context("invalid server configuration")?;

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be greater than zero");
        anyhow::ensure!(
            self.max_body_size_mb > 0,
            "max_body_size_mb must be greater than zero"
        );
        self.matcher_config().validate()?;
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb.saturating_mul(1024 * 1024)
    }

    /// Search limits for the matcher
    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_search_limit() -> usize {
    matcher::DEFAULT_LIMIT
}

fn default_max_search_limit() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 5001);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 10);
        assert_eq!(cfg.default_limit, 5);
        assert!(cfg.enable_cors);
        assert!(cfg.catalog_path.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 5001);
    }

    #[test]
    fn test_bad_bind_addr() {
        let cfg = ServerConfig {
            bind_addr: "not-an-ip".into(),
            ..ServerConfig::default()
        };
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let cfg = ServerConfig {
            timeout_secs: 0,
            ..ServerConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_bad_limits() {
        let cfg = ServerConfig {
            default_limit: 20,
            max_limit: 10,
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_huge_body_size_saturates() {
        let cfg = ServerConfig {
            max_body_size_mb: usize::MAX,
            ..ServerConfig::default()
        };
        assert_eq!(cfg.max_body_size(), usize::MAX);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "catalog_path": "/srv/catalog.json"}"#)
                .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(
            cfg.catalog_path.as_deref(),
            Some(std::path::Path::new("/srv/catalog.json"))
        );
        assert_eq!(cfg.max_body_size(), 10 * 1024 * 1024);
    }
}
