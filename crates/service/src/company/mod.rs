//! Company resource: create and list only.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CompanyService;
