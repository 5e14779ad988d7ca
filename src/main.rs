//! cms-api entry point
//!
//! This is a minimal entrypoint that:
//! 1. Initializes the tracing subscriber
//! 2. Loads configuration from the environment
//! 3. Starts the HTTP server
//! 4. Prints errors to stderr and exits non-zero on failure
//!
//! All request handling logic lives in the http_server module.

use cms_api::db::DbConfig;
use cms_api::http_server::{HttpServer, HttpServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DbConfig::from_env()?;
    let http_config = HttpServerConfig::from_env()?;

    let server = HttpServer::with_config(http_config, db_config);
    server.start().await?;

    Ok(())
}
