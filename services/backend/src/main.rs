use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use backend::build_app;
use backend::models::route::ROUTES;
use backend::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("Invalid configuration")?;

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(settings.mode.log_level().into()))
        .with_target(false)
        .init();

    // Log which settings are configured (NOT their values!)
    info!("Settings configured from env: {:?} ({:?} mode)", settings.configured, settings.mode);

    let app = build_app(&settings);

    let listener = tokio::net::TcpListener::bind(settings.listen_addr())
        .await
        .with_context(|| format!("Failed to bind {}", settings.listen_addr()))?;
    let local_addr = listener.local_addr().context("Failed to read bound address")?;

    info!("🎧 Catalog relay listening on {}", local_addr);
    if !settings.backend_url.is_empty() {
        info!("🌐 Advertised as {}", settings.backend_url);
    }
    info!("📡 Relaying {} routes to {}", ROUTES.len(), settings.upstream_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
