use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geo_gateway::config::loader::load_config;
use geo_gateway::config::GatewayConfig;
use geo_gateway::http::HttpServer;

#[derive(Parser)]
#[command(name = "geo-gateway")]
#[command(about = "Gateway between a navigation client and public geospatial services", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geo_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("geo-gateway v0.1.0 starting");

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        search_base_url = %config.upstream.search_base_url,
        route_base_url = %config.upstream.route_base_url,
        search_timeout_secs = config.upstream.search_timeout_secs,
        route_timeout_secs = config.upstream.route_timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
