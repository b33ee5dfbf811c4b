//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use spa_router::config::AppConfig;
use spa_router::http::HttpServer;
use spa_router::lifecycle::Shutdown;
use spa_router::routing::RouteTable;

/// Start the server on an ephemeral port with the built-in route table.
///
/// Returns the bound address, the shutdown handle that stops it, and the
/// server task, which finishes once shutdown has drained.
pub async fn start_server() -> (SocketAddr, Shutdown, JoinHandle<std::io::Result<()>>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(AppConfig::default(), Arc::new(RouteTable::default_table()));

    let handle = tokio::spawn(server.run(listener, server_shutdown));
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown, handle)
}

/// HTTP client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
