use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::{error, warn};
use uuid::Uuid;

/// JSON error body: `{"error": "..."}`, plus `correlationId` on 5xx.
///
/// Store errors are logged under the correlation id and never echoed to the client.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub correlation_id: Option<Uuid>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(rename = "correlationId", skip_serializing_if = "Option::is_none")]
    correlation_id: Option<Uuid>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, error: error.into(), correlation_id: None }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Resource not found")
    }

    /// Log `err` with a fresh correlation id and hide it behind a generic 500.
    pub fn internal(context: &str, err: impl Display) -> Self {
        let correlation_id = Uuid::new_v4();
        error!(%correlation_id, err = %err, "{context}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal Server Error".into(),
            correlation_id: Some(correlation_id),
        }
    }

    /// Map a service failure; `context` names the operation in the server log.
    pub fn service(context: &str, e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::not_found(),
            ServiceError::Validation(msg) => {
                warn!(%msg, "{context}");
                Self::bad_request(msg)
            }
            ServiceError::Model(m) => {
                warn!(msg = %m, "{context}");
                Self::bad_request(m.to_string())
            }
            ServiceError::Db(_) => Self::internal(context, e),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(err = %rejection.body_text(), "rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: &self.error, correlation_id: self.correlation_id };
        (self.status, Json(body)).into_response()
    }
}
