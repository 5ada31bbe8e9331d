mod bootstrap;
mod courses;
mod health;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use pathwise_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use pathwise_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config).await?;

    health::spawn(
        &app.config.server.bind_address,
        app.config.server.health_check_port,
        app.engine.clone(),
        app.curated.clone(),
    )
    .await?;

    let router = courses::router(
        app.engine.clone(),
        app.curated.clone(),
        app.generator.clone(),
        &app.config.rate_limit,
    );

    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        event_name = "system.server.started",
        bind_address = %address,
        "pathwise-server listening"
    );

    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    let server = axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    tokio::select! {
        result = server => result?,
        () = shutdown_deadline(grace) => {
            tracing::warn!(
                event_name = "system.server.shutdown_timeout",
                grace_secs = grace.as_secs(),
                "graceful shutdown window elapsed with connections still open"
            );
        }
    }

    tracing::info!(event_name = "system.server.stopping", "pathwise-server stopping");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!(event_name = "system.server.shutdown_signal", "shutdown signal received");
}

/// Hard cap on connection draining after the shutdown signal.
async fn shutdown_deadline(grace: Duration) {
    let _ = tokio::signal::ctrl_c().await;
    tokio::time::sleep(grace).await;
}
