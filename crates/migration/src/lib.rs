//! Provisions the `agents` and `company` tables for development and tests.
//! Production schemas are owned by the database, not by these services.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_agents;
mod m20240101_000002_create_company;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_agents::Migration),
            Box::new(m20240101_000002_create_company::Migration),
        ]
    }
}
