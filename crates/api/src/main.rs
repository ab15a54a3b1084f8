use std::sync::Arc;

use anyhow::Context;
use soiree_infra::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    soiree_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = soiree_api::app::services::build_services(&config)
        .await
        .context("failed to initialize storage")?;

    let app = soiree_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
