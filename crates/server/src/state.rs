use crate::config::ServerConfig;
use crate::error::ServerResult;
use catalog::Catalog;
use matcher::Matcher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Read-only catalog snapshot served by every endpoint
    pub catalog: Catalog,

    /// Matcher with the configured search limits
    pub matcher: Matcher,
}

impl ServerState {
    /// Create new server state, loading the catalog named in `config`
    /// or falling back to the built-in sample.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => {
                tracing::info!("No catalog_path configured, serving the sample catalog");
                Catalog::sample()
            }
        };

        Self::with_catalog(config, catalog)
    }

    /// Create server state around an already loaded catalog
    pub fn with_catalog(config: ServerConfig, catalog: Catalog) -> ServerResult<Self> {
        let matcher = Matcher::new(config.matcher_config())?;

        Ok(Self {
            config: Arc::new(config),
            catalog,
            matcher,
        })
    }
}
