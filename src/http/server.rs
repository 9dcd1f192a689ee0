//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy handlers
//! - Wire up middleware (tracing, request timeout, CORS)
//! - Serve the static client page as a fallback
//! - Bind server to listener and run with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::geocode::geocode_proxy;
use crate::route::route_proxy;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
///
/// Built once at startup; everything inside is immutable per request, so
/// handlers share nothing mutable across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub upstream: UpstreamClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the outbound HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig) -> reqwest::Result<Self> {
        let upstream = UpstreamClient::new(&config.upstream)?;

        let state = AppState {
            config: Arc::new(config.clone()),
            upstream,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/nominatim-proxy", get(geocode_proxy))
            .route("/osrm-proxy", get(route_proxy))
            .with_state(state);

        if config.static_files.enabled {
            router = router.fallback_service(ServeDir::new(&config.static_files.dir));
        }
        if config.cors.enabled {
            router = router.layer(CorsLayer::permissive());
        }

        router
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        // Fall through: without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
