use std::future::Future;

use configs::AppConfig;
use tracing::info;

use crate::proxy::{build_router, GatewayState};

/// Serve the keyword proxy until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = GatewayState::new(cfg.gateway.upstream_url.clone());
    let app = build_router(state);

    let addr = cfg.gateway.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, upstream = %cfg.gateway.upstream_url, "gateway listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
