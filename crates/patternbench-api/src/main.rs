// Patternbench API server
// Decision: Benchmarks run on the blocking pool; the async runtime only
//           parses requests and answers microcall echoes

mod bench;
mod client;
mod config;
mod render;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServiceConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patternbench_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("patternbench-api starting...");

    let config = ServiceConfig::from_env().context("Failed to load service configuration")?;
    tracing::info!(
        path = %config.service_path,
        local = %config.local_base,
        peer = %config.peer_base,
        remote = %config.remote_base,
        "Service configured"
    );

    let app = bench::routes(&config).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
