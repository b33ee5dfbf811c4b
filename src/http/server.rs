//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the history-mode fallback handler
//! - Wire up middleware (trace, timeout, request ID)
//! - Bind server to listener and shut down gracefully
//! - Dispatch every page request to the route table

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, Uri},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{decode_path, request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::page_response;
use crate::observability::metrics;
use crate::routing::{RouteMatch, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
}

/// History-mode server for the single-page application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `table`.
    pub fn new(config: AppConfig, table: Arc<RouteTable>) -> Self {
        let router = Self::build_router(&config, AppState { table });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let request_id_layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = %request_id(req),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID));

        Router::new()
            .route("/healthz", get(health_handler))
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(request_id_layers)
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            timeout_secs = self.config.server.request_timeout_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Resolve the request path and render the outcome.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    let outcome = match decode_path(uri.path()) {
        Some(path) => state.table.resolve(&path),
        None => {
            tracing::warn!(path = %uri.path(), "Request path is not valid UTF-8");
            RouteMatch::NotFound {
                path: uri.path().to_string(),
            }
        }
    };

    match outcome.view() {
        Some(view) if outcome.is_redirected() => {
            tracing::debug!(location = %outcome.path(), view = %view, "Redirecting")
        }
        Some(view) => tracing::debug!(view = %view, "Rendering view"),
        None => tracing::warn!(path = %uri.path(), "No route matched"),
    }

    let response = page_response(outcome, uri.query());
    metrics::record_request(response.status().as_u16(), start);
    response
}

async fn health_handler() -> &'static str {
    "ok"
}
