//! docmatch HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tokio::signal;

use docmatch_core::batch::SnapshotWriter;
use docmatch_core::client::HttpComparisonClient;
use docmatch_core::config::Config;
use docmatch_server::gateway::{HandlerState, cors_layer, create_router_with_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        engine_url = %config.engine_url,
        snapshot_path = %config.snapshot_path.display(),
        "docmatch starting"
    );

    let client = HttpComparisonClient::new(
        &config.engine_url,
        Duration::from_secs(config.engine_timeout_secs),
    )?;
    let state = HandlerState::new(
        Arc::new(client),
        SnapshotWriter::new(config.snapshot_path.clone()),
    );

    let mut app = create_router_with_state(state);
    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => app = app.layer(cors_layer(origin)),
        Err(_) => tracing::warn!(
            origin = %config.cors_origin,
            "invalid CORS origin, cross-origin requests disabled"
        ),
    }

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("docmatch shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
