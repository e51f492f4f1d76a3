//! jobmatch server - HTTP REST API for skill extraction and match scoring
//!
//! This binary exposes the jobmatch engine via REST endpoints with
//! API key authentication and rate limiting.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
