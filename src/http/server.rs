//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the proxy handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Serve on a listener until the shutdown signal fires

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::backend::{BackendClient, BackendError};
use crate::config::DashboardConfig;
use crate::http::handlers;
use crate::http::request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new(&config.backend)?,
        })
    }
}

/// HTTP server for the proxy layer.
pub struct HttpServer {
    router: Router,
    config: DashboardConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DashboardConfig) -> Result<Self, BackendError> {
        let state = AppState::new(&config)?;
        let router = build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A handle to the router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &DashboardConfig, state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_products))
        .route(
            "/api/product",
            get(handlers::get_product)
                .post(handlers::create_product)
                .put(handlers::update_product),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id(request),
            )
        }))
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
}
