use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use common::types::Message;
use models::agent;
use service::agent::domain::{CreateAgentInput, ReplaceAgentInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AgentCreated {
    pub message: String,
    #[serde(rename = "agentId")]
    pub agent_id: String,
}

#[utoipa::path(
    get, path = "/agents", tag = "agents",
    responses(
        (status = 200, description = "All agents", body = [crate::openapi::AgentDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<agent::Model>>, JsonApiError> {
    let rows = state
        .agents
        .list()
        .await
        .map_err(|e| JsonApiError::service("Error fetching agents", e))?;
    info!(count = rows.len(), "list agents");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/agents/{id}", tag = "agents",
    params(("id" = String, Path, description = "Agent code")),
    responses(
        (status = 200, description = "The agent", body = crate::openapi::AgentDoc),
        (status = 404, description = "Agent not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<agent::Model>, JsonApiError> {
    state
        .agents
        .get(&code)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::service("Error fetching agent", e))
}

#[utoipa::path(
    post, path = "/agents", tag = "agents",
    request_body = crate::openapi::CreateAgentDoc,
    responses(
        (status = 200, description = "Agent created successfully", body = AgentCreated),
        (status = 400, description = "Bad Request - missing or invalid fields", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateAgentInput>, JsonRejection>,
) -> Result<Json<AgentCreated>, JsonApiError> {
    let Json(input) = payload?;
    let created = state
        .agents
        .create(input)
        .await
        .map_err(|e| JsonApiError::service("Error creating agent", e))?;
    Ok(Json(AgentCreated {
        message: "Agent created successfully".into(),
        agent_id: created.agent_code,
    }))
}

#[utoipa::path(
    patch, path = "/agents/{id}", tag = "agents",
    params(("id" = String, Path, description = "Agent code")),
    request_body = crate::openapi::UpdateAgentDoc,
    responses(
        (status = 200, description = "Agent updated successfully", body = crate::openapi::MessageDoc),
        (status = 400, description = "Bad Request - unknown or invalid fields", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Agent not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Json(body) = payload?;
    state
        .agents
        .patch(&code, &body)
        .await
        .map_err(|e| JsonApiError::service("Error updating agent", e))?;
    Ok(Json(Message::new("Agent updated successfully")))
}

#[utoipa::path(
    put, path = "/agents/{id}", tag = "agents",
    params(("id" = String, Path, description = "Agent code")),
    request_body = crate::openapi::UpdateAgentDoc,
    responses(
        (status = 200, description = "Agent updated successfully", body = crate::openapi::MessageDoc),
        (status = 400, description = "Bad Request - missing required fields", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Agent not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    payload: Result<Json<ReplaceAgentInput>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Json(input) = payload?;
    state
        .agents
        .replace(&code, input)
        .await
        .map_err(|e| JsonApiError::service("Error updating agent", e))?;
    Ok(Json(Message::new("Agent updated successfully")))
}

#[utoipa::path(
    delete, path = "/agents/{id}", tag = "agents",
    params(("id" = String, Path, description = "Agent code")),
    responses(
        (status = 200, description = "Agent deleted successfully", body = crate::openapi::MessageDoc),
        (status = 404, description = "Agent not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state
        .agents
        .delete(&code)
        .await
        .map_err(|e| JsonApiError::service("Error deleting agent", e))?;
    Ok(Json(Message::new("Agent deleted successfully")))
}
