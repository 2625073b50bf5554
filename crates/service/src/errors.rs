use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn db(e: impl std::fmt::Display) -> Self { Self::Db(e.to_string()) }

    /// True for failures the client caused (400-class).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(_))
    }
}
