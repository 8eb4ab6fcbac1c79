use anyhow::Context;

use loadsim_api::config::ApiConfig;
use loadsim_observability::LogConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    loadsim_observability::init(&LogConfig::from_env());

    let config = ApiConfig::from_env()?;
    let app = loadsim_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        token_ttl_minutes = config.token_ttl.num_minutes(),
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
