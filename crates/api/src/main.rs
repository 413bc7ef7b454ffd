use anyhow::Context;

use scancart_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scancart_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = scancart_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        catalog = %config.catalog_path.display(),
        "scancart listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("scancart stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
