//! Create `agents` table.
//!
//! Column names are upper-case to match the existing sample schema.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agents::Table)
                    .if_not_exists()
                    .col(string_len(Agents::AgentCode, 6).primary_key())
                    .col(string_len(Agents::AgentName, 40).not_null())
                    .col(string_len(Agents::WorkingArea, 35).not_null())
                    .col(decimal_len(Agents::Commission, 10, 2).not_null())
                    .col(string_len(Agents::PhoneNo, 15).not_null())
                    .col(string_len(Agents::Country, 25).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Agents::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    #[sea_orm(iden = "AGENT_CODE")]
    AgentCode,
    #[sea_orm(iden = "AGENT_NAME")]
    AgentName,
    #[sea_orm(iden = "WORKING_AREA")]
    WorkingArea,
    #[sea_orm(iden = "COMMISSION")]
    Commission,
    #[sea_orm(iden = "PHONE_NO")]
    PhoneNo,
    #[sea_orm(iden = "COUNTRY")]
    Country,
}
