use models::agent::{self, AgentField};
use models::coerce;
use sea_orm::prelude::Decimal;
use sea_orm::Value;
use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::errors::ServiceError;

/// Create input; every column is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateAgentInput {
    pub agent_code: String,
    pub agent_name: String,
    pub working_area: String,
    #[serde(deserialize_with = "coerce::decimal_lenient")]
    pub commission: Decimal,
    pub phone_no: String,
    pub country: String,
}

impl CreateAgentInput {
    pub fn into_model(self) -> Result<agent::Model, ServiceError> {
        agent::validate_code(&self.agent_code)?;
        Ok(agent::Model {
            agent_code: self.agent_code,
            agent_name: self.agent_name,
            working_area: self.working_area,
            commission: self.commission,
            phone_no: self.phone_no,
            country: self.country,
        })
    }
}

/// Full replacement input. Fields are optional here so that absence can be
/// reported as a validation error rather than a decode failure. `COMMISSION`
/// stays raw JSON until its truthiness has been judged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReplaceAgentInput {
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub working_area: Option<String>,
    #[serde(default)]
    pub commission: Option<serde_json::Value>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl ReplaceAgentInput {
    /// All five fields must be present and truthy. A truthy commission must also be numeric.
    pub fn into_changes(self) -> Result<AgentChanges, ServiceError> {
        fn text(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }

        let commission = self.commission.filter(coerce::is_truthy);
        let mut changes = AgentChanges {
            agent_name: text(self.agent_name),
            working_area: text(self.working_area),
            commission: None,
            phone_no: text(self.phone_no),
            country: text(self.country),
        };

        let missing: Vec<&str> = AgentField::ALL
            .into_iter()
            .filter(|f| match f {
                AgentField::Commission => commission.is_none(),
                _ => !changes.has(*f),
            })
            .map(AgentField::key)
            .collect();
        if !missing.is_empty() {
            return Err(ServiceError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        if let Some(raw) = commission {
            let n = coerce::decimal_from_value(&raw)
                .ok_or_else(|| ServiceError::Validation("COMMISSION must be numeric".into()))?;
            changes.commission = Some(n);
        }
        Ok(changes)
    }
}

/// A validated set of column writes keyed by agent code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentChanges {
    pub agent_name: Option<String>,
    pub working_area: Option<String>,
    pub commission: Option<Decimal>,
    pub phone_no: Option<String>,
    pub country: Option<String>,
}

impl AgentChanges {
    /// Build from a PATCH body. Keys outside [`AgentField`] are rejected.
    pub fn from_patch(body: &Map<String, serde_json::Value>) -> Result<Self, ServiceError> {
        let mut changes = AgentChanges::default();
        for (key, value) in body {
            let field = AgentField::from_key(key)
                .ok_or_else(|| ServiceError::Validation(format!("unknown field: {key}")))?;
            if value.is_null() {
                return Err(ServiceError::Validation(format!("{key} must not be null")));
            }
            let text = || {
                value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ServiceError::Validation(format!("{key} must be a string")))
            };
            match field {
                AgentField::Commission => {
                    let n = coerce::decimal_from_value(value).ok_or_else(|| {
                        ServiceError::Validation(format!("{key} must be numeric"))
                    })?;
                    changes.commission = Some(n);
                }
                AgentField::AgentName => changes.agent_name = Some(text()?),
                AgentField::WorkingArea => changes.working_area = Some(text()?),
                AgentField::PhoneNo => changes.phone_no = Some(text()?),
                AgentField::Country => changes.country = Some(text()?),
            }
        }
        if changes.is_empty() {
            return Err(ServiceError::Validation("no updatable fields supplied".into()));
        }
        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        AgentField::ALL.into_iter().all(|f| !self.has(f))
    }

    pub fn has(&self, field: AgentField) -> bool {
        match field {
            AgentField::AgentName => self.agent_name.is_some(),
            AgentField::WorkingArea => self.working_area.is_some(),
            AgentField::Commission => self.commission.is_some(),
            AgentField::PhoneNo => self.phone_no.is_some(),
            AgentField::Country => self.country.is_some(),
        }
    }

    /// Column/value pairs in allow-list order, supplied fields only.
    pub fn assignments(&self) -> Vec<(AgentField, Value)> {
        let mut out = Vec::new();
        if let Some(v) = &self.agent_name { out.push((AgentField::AgentName, Value::from(v.clone()))); }
        if let Some(v) = &self.working_area { out.push((AgentField::WorkingArea, Value::from(v.clone()))); }
        if let Some(v) = self.commission { out.push((AgentField::Commission, Value::from(v))); }
        if let Some(v) = &self.phone_no { out.push((AgentField::PhoneNo, Value::from(v.clone()))); }
        if let Some(v) = &self.country { out.push((AgentField::Country, Value::from(v.clone()))); }
        out
    }

    pub fn apply(&self, m: &mut agent::Model) {
        if let Some(v) = &self.agent_name { m.agent_name = v.clone(); }
        if let Some(v) = &self.working_area { m.working_area = v.clone(); }
        if let Some(v) = self.commission { m.commission = v; }
        if let Some(v) = &self.phone_no { m.phone_no = v.clone(); }
        if let Some(v) = &self.country { m.country = v.clone(); }
    }
}
