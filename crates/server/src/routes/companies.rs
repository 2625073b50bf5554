use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use models::company;
use service::company::domain::CreateCompanyInput;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CompanyCreated {
    pub message: String,
    #[serde(rename = "companyId")]
    pub company_id: String,
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses(
        (status = 200, description = "All companies", body = [crate::openapi::CompanyDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<company::Model>>, JsonApiError> {
    let rows = state
        .companies
        .list()
        .await
        .map_err(|e| JsonApiError::service("Error fetching companies", e))?;
    info!(count = rows.len(), "list companies");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyDoc,
    responses(
        (status = 200, description = "Company created successfully", body = CompanyCreated),
        (status = 400, description = "Bad Request - missing or invalid fields", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateCompanyInput>, JsonRejection>,
) -> Result<Json<CompanyCreated>, JsonApiError> {
    let Json(input) = payload?;
    let created = state
        .companies
        .create(input)
        .await
        .map_err(|e| JsonApiError::service("Error creating company", e))?;
    Ok(Json(CompanyCreated {
        message: "Company created successfully".into(),
        company_id: created.company_id.to_string(),
    }))
}
