//! HTTP server command for the users API
//!
//! Database settings come from `DB_USER`, `DB_PASSWORD`, `DB_NAME` (plus the
//! optional `DB_HOST`, `DB_PORT`, `DB_SSLMODE`). A connection that cannot be
//! opened or pinged aborts start-up.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use users_server::config::DEFAULT_MAX_CONNECTIONS;
use users_server::{run_server, Database, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

async fn connect(max_connections: u32) -> Result<Database> {
    let config = DbConfig::from_env()
        .context("Invalid database configuration. Set DB_USER, DB_PASSWORD and DB_NAME")?
        .with_max_connections(max_connections);

    Database::initialize(&config)
        .await
        .with_context(|| format!("Failed to connect to database '{}' on {}:{}", config.name, config.host, config.port))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = connect(args.max_connections).await?;

    tracing::info!("Starting users server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}

/// Open the pool once, ping it, and exit
pub async fn run_check() -> Result<()> {
    connect(1).await?;
    tracing::info!("Database reachable");
    Ok(())
}
