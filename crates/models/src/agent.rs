use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agents")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "AGENT_CODE")]
    pub agent_code: String,
    #[sea_orm(column_name = "AGENT_NAME")]
    pub agent_name: String,
    #[sea_orm(column_name = "WORKING_AREA")]
    pub working_area: String,
    /// `DECIMAL(10,2)` in the store, plain JSON number on the wire.
    #[sea_orm(column_name = "COMMISSION", column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    #[sea_orm(column_name = "PHONE_NO")]
    pub phone_no: String,
    #[sea_orm(column_name = "COUNTRY")]
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns a client may rewrite. `AGENT_CODE` is the key and is never updatable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentField {
    AgentName,
    WorkingArea,
    Commission,
    PhoneNo,
    Country,
}

impl AgentField {
    pub const ALL: [AgentField; 5] = [
        AgentField::AgentName,
        AgentField::WorkingArea,
        AgentField::Commission,
        AgentField::PhoneNo,
        AgentField::Country,
    ];

    /// JSON key (and column name) for this field.
    pub fn key(self) -> &'static str {
        match self {
            AgentField::AgentName => "AGENT_NAME",
            AgentField::WorkingArea => "WORKING_AREA",
            AgentField::Commission => "COMMISSION",
            AgentField::PhoneNo => "PHONE_NO",
            AgentField::Country => "COUNTRY",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn column(self) -> Column {
        match self {
            AgentField::AgentName => Column::AgentName,
            AgentField::WorkingArea => Column::WorkingArea,
            AgentField::Commission => Column::Commission,
            AgentField::PhoneNo => Column::PhoneNo,
            AgentField::Country => Column::Country,
        }
    }
}

pub fn validate_code(code: &str) -> Result<(), errors::ModelError> {
    if code.trim().is_empty() {
        return Err(errors::ModelError::Validation("AGENT_CODE must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_round_trips_keys() {
        for f in AgentField::ALL {
            assert_eq!(AgentField::from_key(f.key()), Some(f));
        }
    }

    #[test]
    fn key_column_is_not_updatable() {
        assert_eq!(AgentField::from_key("AGENT_CODE"), None);
        assert_eq!(AgentField::from_key("agent_name"), None);
        assert_eq!(AgentField::from_key("AGENT_NAME = 'x'; --"), None);
    }

    #[test]
    fn json_uses_column_names() {
        let m = Model {
            agent_code: "A001".into(),
            agent_name: "Alice".into(),
            working_area: "NY".into(),
            commission: Decimal::new(15, 2),
            phone_no: "555-0100".into(),
            country: "US".into(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["AGENT_CODE"], "A001");
        assert_eq!(v["WORKING_AREA"], "NY");
        assert_eq!(v["COMMISSION"], 0.15);
        assert_eq!(v["PHONE_NO"], "555-0100");
    }

    #[test]
    fn blank_code_is_rejected() {
        assert!(validate_code("   ").is_err());
        assert!(validate_code("A001").is_ok());
    }
}
