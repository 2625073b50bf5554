//! Agent resource: domain inputs, persistence, business rules.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::AgentService;
