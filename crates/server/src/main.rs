//! Textfix Server - HTTP API for text normalization
//!
//! Listens on all interfaces, port 8000 by default.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
