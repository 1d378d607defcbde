//! Product dashboard proxy server.
//!
//! ```text
//!   Dashboard                 ┌──────────────────────────────┐
//!   ──────────────────────────┼─▶ /api/products  /api/product │
//!                             │   request id · trace · limits │
//!                             │          handlers             │
//!                             │             │                 │
//!                             │      backend client ──────────┼──▶ Product backend
//!                             └──────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use product_dashboard::config::validation::validate_config;
use product_dashboard::config::{load_config, ConfigError, DashboardConfig};
use product_dashboard::http::HttpServer;
use product_dashboard::lifecycle::{wait_for_signal, Shutdown};
use product_dashboard::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "product-dashboard")]
#[command(about = "Proxy server for the product dashboard", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(long)]
    bind: Option<String>,

    /// Override `backend.base_url`.
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!(subscribers = shutdown.receiver_count(), "Shutting down");
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
