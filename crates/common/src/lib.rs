use thiserror::Error;

pub mod types;
pub mod utils;
pub mod upstream;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream returned status {0}")]
    Upstream(u16),
    #[error("body read error: {0}")]
    Body(String),
}
