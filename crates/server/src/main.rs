//! APEX.SPHERE Server - HTTP API for multilingual product search

use anyhow::Context;
use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("failed to load server configuration")?;

    server::start_server(config).await?;

    Ok(())
}
