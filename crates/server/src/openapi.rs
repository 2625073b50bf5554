use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AgentDoc {
    pub agent_code: String,
    pub agent_name: String,
    pub working_area: String,
    pub commission: f64,
    pub phone_no: String,
    pub country: String,
}

/// `COMMISSION` may also be sent as a numeric string.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateAgentDoc {
    pub agent_code: String,
    pub agent_name: String,
    pub working_area: String,
    pub commission: f64,
    pub phone_no: String,
    pub country: String,
}

/// PATCH accepts any non-empty subset; PUT requires all five.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UpdateAgentDoc {
    pub agent_name: Option<String>,
    pub working_area: Option<String>,
    pub commission: Option<f64>,
    pub phone_no: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CompanyDoc {
    pub company_id: i32,
    pub company_name: String,
    pub company_city: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    #[serde(rename = "correlationId")]
    pub correlation_id: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Agents API", description = "Agents and companies CRUD over MariaDB"),
    paths(
        crate::routes::health,
        crate::routes::agents::list,
        crate::routes::agents::get,
        crate::routes::agents::create,
        crate::routes::agents::patch,
        crate::routes::agents::replace,
        crate::routes::agents::delete,
        crate::routes::companies::list,
        crate::routes::companies::create,
    ),
    components(
        schemas(
            HealthResponse,
            AgentDoc,
            CreateAgentDoc,
            UpdateAgentDoc,
            CompanyDoc,
            MessageDoc,
            ErrorDoc,
            crate::routes::agents::AgentCreated,
            crate::routes::companies::CompanyCreated,
        )
    ),
    tags(
        (name = "health"),
        (name = "agents"),
        (name = "companies")
    )
)]
pub struct ApiDoc;
