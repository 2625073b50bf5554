//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules from data access (repository traits).
//! - SeaORM repositories for production, in-memory ones for tests.

pub mod errors;
pub mod agent;
pub mod company;
