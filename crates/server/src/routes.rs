use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::agent::{repository::SeaOrmAgentRepository, AgentService};
use service::company::{repository::SeaOrmCompanyRepository, CompanyService};

use crate::openapi::ApiDoc;

pub mod agents;
pub mod companies;

/// Handler state; the pool lives inside the repositories behind each service.
#[derive(Clone)]
pub struct ServerState {
    pub agents: AgentService,
    pub companies: CompanyService,
}

impl ServerState {
    pub fn new(agents: AgentService, companies: CompanyService) -> Self {
        Self { agents, companies }
    }

    /// Wire SeaORM repositories over a shared pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let agents = AgentService::new(Arc::new(SeaOrmAgentRepository { db: db.clone() }));
        let companies = CompanyService::new(Arc::new(SeaOrmCompanyRepository { db }));
        Self::new(agents, companies)
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: CRUD routes, health, and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/agents", get(agents::list).post(agents::create))
        .route(
            "/agents/:id",
            get(agents::get)
                .patch(agents::patch)
                .put(agents::replace)
                .delete(agents::delete),
        )
        .route("/companies", get(companies::list).post(companies::create))
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
