use anyhow::Result;
use dashboard_service::{config::AppConfig, http, metrics_server, observability, pipeline::Dashboard};
use std::{net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    // Materialize and join the dataset once; queries only re-filter it.
    let dashboard = Arc::new(Dashboard::build());
    tracing::info!(
        horses = dashboard.dataset().horses.len(),
        water_rows = dashboard.dataset().water.len(),
        temperature_rows = dashboard.dataset().temperature.len(),
        combined_rows = dashboard.combined().len(),
        "dataset materialized"
    );

    let addr: SocketAddr = cfg
        .server
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server.bind_addr: {e}"))?;

    let app = http::router(dashboard);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dashboard service listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
