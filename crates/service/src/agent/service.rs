use std::sync::Arc;

use models::agent::{self, AgentField};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::domain::{AgentChanges, CreateAgentInput, ReplaceAgentInput};
use super::repository::AgentRepository;
use crate::errors::ServiceError;

/// Agent business service independent of web framework.
#[derive(Clone)]
pub struct AgentService {
    repo: Arc<dyn AgentRepository>,
}

impl AgentService {
    pub fn new(repo: Arc<dyn AgentRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<agent::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Fetch one agent by its code.
    ///
    /// # Examples
    /// ```
    /// use service::agent::{AgentService, repository::mock::MockAgentRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = AgentService::new(Arc::new(MockAgentRepository::default()));
    /// let res = tokio_test::block_on(svc.get("NOPE"));
    /// assert!(matches!(res, Err(ServiceError::NotFound(_))));
    /// ```
    pub async fn get(&self, code: &str) -> Result<agent::Model, ServiceError> {
        self.repo
            .find(code)
            .await?
            .ok_or_else(|| ServiceError::not_found("agent"))
    }

    /// Insert a new agent and return the stored row.
    ///
    /// # Examples
    /// ```
    /// use service::agent::{AgentService, domain::CreateAgentInput, repository::mock::MockAgentRepository};
    /// use sea_orm::prelude::Decimal;
    /// use std::sync::Arc;
    /// let svc = AgentService::new(Arc::new(MockAgentRepository::default()));
    /// let input = CreateAgentInput {
    ///     agent_code: "A001".into(), agent_name: "Alice".into(), working_area: "NY".into(),
    ///     commission: Decimal::new(15, 2), phone_no: "555-0100".into(), country: "US".into(),
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.get("A001")).unwrap(), created);
    /// ```
    #[instrument(skip(self, input), fields(agent_code = %input.agent_code))]
    pub async fn create(&self, input: CreateAgentInput) -> Result<agent::Model, ServiceError> {
        let model = input.into_model()?;
        self.repo.insert(model.clone()).await?;
        info!("agent_created");
        Ok(model)
    }

    /// Partial update; only allow-listed keys are accepted.
    #[instrument(skip(self, body))]
    pub async fn patch(&self, code: &str, body: &Map<String, Value>) -> Result<(), ServiceError> {
        let changes = AgentChanges::from_patch(body)?;
        self.apply(code, &changes).await
    }

    /// Full update of the five non-key fields.
    #[instrument(skip(self, input))]
    pub async fn replace(&self, code: &str, input: ReplaceAgentInput) -> Result<(), ServiceError> {
        let changes = input.into_changes()?;
        self.apply(code, &changes).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, code: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(code).await? {
            return Err(ServiceError::not_found("agent"));
        }
        info!("agent_deleted");
        Ok(())
    }

    async fn apply(&self, code: &str, changes: &AgentChanges) -> Result<(), ServiceError> {
        if !self.repo.update(code, changes).await? {
            return Err(ServiceError::not_found("agent"));
        }
        let fields = AgentField::ALL.into_iter().filter(|f| changes.has(*f)).count();
        info!(fields, "agent_updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::repository::mock::MockAgentRepository;
    use sea_orm::prelude::Decimal;
    use serde_json::json;

    fn svc() -> AgentService {
        AgentService::new(Arc::new(MockAgentRepository::default()))
    }

    fn alice_input() -> CreateAgentInput {
        CreateAgentInput {
            agent_code: "A001".into(),
            agent_name: "Alice".into(),
            working_area: "NY".into(),
            commission: Decimal::new(15, 2),
            phone_no: "555-0100".into(),
            country: "US".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_submitted_fields() {
        let svc = svc();
        svc.create(alice_input()).await.unwrap();
        let got = svc.get("A001").await.unwrap();
        assert_eq!(got.agent_name, "Alice");
        assert_eq!(got.commission, Decimal::new(15, 2));
        assert_eq!(got.country, "US");
    }

    #[tokio::test]
    async fn blank_code_is_a_validation_error() {
        let mut input = alice_input();
        input.agent_code = " ".into();
        let err = svc().create(input).await.unwrap_err();
        assert!(err.is_client_error(), "{err:?}");
    }

    #[tokio::test]
    async fn patch_leaves_other_fields_alone() {
        let svc = svc();
        svc.create(alice_input()).await.unwrap();
        let body = json!({"WORKING_AREA": "SF"});
        svc.patch("A001", body.as_object().unwrap()).await.unwrap();

        let got = svc.get("A001").await.unwrap();
        assert_eq!(got.working_area, "SF");
        assert_eq!(got.agent_name, "Alice");
        assert_eq!(got.phone_no, "555-0100");
    }

    #[tokio::test]
    async fn patch_with_unknown_key_does_not_mutate() {
        let svc = svc();
        svc.create(alice_input()).await.unwrap();
        let body = json!({"WORKING_AREA": "SF", "BOGUS": 1});
        let err = svc.patch("A001", body.as_object().unwrap()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(svc.get("A001").await.unwrap().working_area, "NY");
    }

    #[tokio::test]
    async fn replace_missing_field_does_not_mutate() {
        let svc = svc();
        svc.create(alice_input()).await.unwrap();
        let input = ReplaceAgentInput { agent_name: Some("Zed".into()), ..Default::default() };
        assert!(matches!(svc.replace("A001", input).await, Err(ServiceError::Validation(_))));
        assert_eq!(svc.get("A001").await.unwrap().agent_name, "Alice");
    }

    #[tokio::test]
    async fn update_and_delete_unknown_code_are_not_found() {
        let svc = svc();
        let body = json!({"COUNTRY": "UK"});
        assert!(matches!(svc.patch("X", body.as_object().unwrap()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete("X").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_agent() {
        let svc = svc();
        svc.create(alice_input()).await.unwrap();
        svc.delete("A001").await.unwrap();
        assert!(matches!(svc.get("A001").await, Err(ServiceError::NotFound(_))));
    }
}
