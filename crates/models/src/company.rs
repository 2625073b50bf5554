use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "COMPANY_ID")]
    pub company_id: i32,
    #[sea_orm(column_name = "COMPANY_NAME")]
    pub company_name: String,
    #[sea_orm(column_name = "COMPANY_CITY")]
    pub company_city: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
