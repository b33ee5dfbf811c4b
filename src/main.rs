//! SPA Router (v1)
//!
//! Serves a single-page application in history mode.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                  SPA ROUTER                   │
//!                      │                                               │
//!     Browser Request  │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ routing  │───▶│  views   │  │
//!                      │  │ server  │    │  table   │    │  render  │  │
//!                      │  └─────────┘    └────┬─────┘    └────┬─────┘  │
//!                      │                      │ redirect      │        │
//!     Page / Redirect  │  ┌─────────┐         ▼               │        │
//!     ◀────────────────┼──│response │◀────────────────────────┘        │
//!                      │  └─────────┘                                  │
//!                      │                                               │
//!                      │  config · observability · lifecycle           │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use spa_router::config::validate_config;
use spa_router::http::HttpServer;
use spa_router::lifecycle::{signals, startup, Shutdown};
use spa_router::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "History-mode server for the single-page application", long_about = None)]
struct Args {
    /// Path to a TOML config file. Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = startup::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
        if let Err(errors) = validate_config(&config) {
            for e in &errors {
                eprintln!("config error: {}", e);
            }
            return Err("invalid --bind address".into());
        }
    }

    logging::init_logging(&config.observability);
    tracing::info!("spa-router v{} starting", env!("CARGO_PKG_VERSION"));

    let table = startup::build_route_table(&config)?;

    tracing::info!(
        bind_address = %config.server.bind_address,
        routes = table.len(),
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(config, table);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
