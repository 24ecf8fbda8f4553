//! txt2json Server - HTTP API for text-to-JSON file conversion
//!
//! Binary entry point: loads configuration from the environment (and
//! an optional `server` config file) and runs the server until
//! shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env if present
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
