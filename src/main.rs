//! redirector — path-to-URL redirect service.
//!
//! # Architecture Overview
//!
//! ```text
//! config file (TOML) + rules (YAML)
//!     → config::loader (parse, fail fast)
//!     → routing::RedirectTable (last-write-wins path map)
//!     → http::RedirectHandler (302 on hit, fallback on miss)
//!     → axum serve loop (trace middleware, graceful shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redirector::config::{load_config, load_rules, RedirectorConfig};
use redirector::http::HttpServer;
use redirector::routing::RedirectTable;

#[derive(Parser, Debug)]
#[command(name = "redirector")]
#[command(about = "Path-to-URL redirect server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redirector=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("redirector v0.1.0 starting");

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RedirectorConfig::default(),
    };

    // Fail fast: a rule decode error aborts startup before any handler
    // is constructed.
    let rules = load_rules(&config)?;
    let table = RedirectTable::from_rules(rules);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        entries = table.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => redirector::observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(table);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
