//! APEX.SPHERE Server - HTTP API for multilingual product search
//!
//! This crate exposes the catalog matcher over a small JSON API:
//!
//! - **Search**: keyword search with weighted field scoring
//! - **Recommendations**: mock personal recommendations
//! - **Virtual try-on**: mock fit preview
//! - **Health**: liveness and readiness probes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Service information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /api/products` - Catalog listing
//! - `POST /ai/search` - Search the catalog (`query`, `language`, `limit`, `explain`)
//! - `POST /ai/recommend` - Recommendations (`preferences`)
//! - `POST /ai/virtual-try` - Virtual try-on (`product_id`, `user_photo`)
//!
//! Errors are returned as `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
