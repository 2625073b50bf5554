//! Create `company` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(integer(Company::CompanyId).primary_key())
                    .col(string_len(Company::CompanyName, 25).not_null())
                    .col(string_len(Company::CompanyCity, 25).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    #[sea_orm(iden = "COMPANY_ID")]
    CompanyId,
    #[sea_orm(iden = "COMPANY_NAME")]
    CompanyName,
    #[sea_orm(iden = "COMPANY_CITY")]
    CompanyCity,
}
