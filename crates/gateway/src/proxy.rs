use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use common::types::Health;
use common::upstream::fetch_keyword;

use crate::observability::{encode_metrics, REQUESTS_TOTAL, REQUEST_DURATION, UPSTREAM_ERRORS_TOTAL};

/// Fixed body for any upstream failure.
pub const KEYWORD_NOT_FOUND: &str = "Error: Keyword not found";

#[derive(Clone)]
pub struct GatewayState {
    pub client: reqwest::Client,
    pub upstream_url: String,
}

impl GatewayState {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), upstream_url: upstream_url.into() }
    }
}

#[derive(Debug, Deserialize)]
pub struct SayQuery {
    pub keyword: Option<String>,
}

fn keyword_not_found() -> Response {
    UPSTREAM_ERRORS_TOTAL.inc();
    (StatusCode::INTERNAL_SERVER_ERROR, KEYWORD_NOT_FOUND).into_response()
}

/// Forward `keyword` to the upstream function and relay its reply.
///
/// Only two outcomes exist: the upstream body, or a 500 with [`KEYWORD_NOT_FOUND`].
pub async fn say(
    State(state): State<GatewayState>,
    query: Result<Query<SayQuery>, QueryRejection>,
) -> Response {
    REQUESTS_TOTAL.inc();
    let started = Instant::now();

    let q = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            warn!(err = %rejection.body_text(), "undecodable query string");
            REQUEST_DURATION.observe(started.elapsed().as_secs_f64());
            return keyword_not_found();
        }
    };

    let result = fetch_keyword(&state.client, &state.upstream_url, q.keyword.as_deref()).await;
    REQUEST_DURATION.observe(started.elapsed().as_secs_f64());

    match result {
        Ok(reply) => {
            info!(keyword = ?q.keyword, bytes = reply.body.len(), "say relayed");
            match reply.content_type {
                Some(ct) => ([(header::CONTENT_TYPE, ct)], reply.body).into_response(),
                None => reply.body.into_response(),
            }
        }
        Err(e) => {
            warn!(keyword = ?q.keyword, err = %e, "upstream call failed");
            keyword_not_found()
        }
    }
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/say", get(say))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
