use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: open the pool, serve until `shutdown` resolves, then close the pool.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // 连接池只在这里创建一次，通过 ServerState 注入各个 handler
    let db = models::db::connect(&cfg.database).await?;
    let state = ServerState::from_db(db.clone());

    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    db.close().await?;
    info!(event = "pool_closed", "database pool closed");
    Ok(())
}
