use async_trait::async_trait;
use models::agent;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::domain::AgentChanges;
use crate::errors::ServiceError;

#[async_trait]
pub trait AgentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<agent::Model>, ServiceError>;
    async fn find(&self, code: &str) -> Result<Option<agent::Model>, ServiceError>;
    async fn insert(&self, agent: agent::Model) -> Result<(), ServiceError>;
    /// Returns false when no agent has `code`.
    async fn update(&self, code: &str, changes: &AgentChanges) -> Result<bool, ServiceError>;
    /// Returns false when nothing was removed.
    async fn delete(&self, code: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAgentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AgentRepository for SeaOrmAgentRepository {
    async fn list(&self) -> Result<Vec<agent::Model>, ServiceError> {
        agent::Entity::find().all(&self.db).await.map_err(ServiceError::db)
    }

    async fn find(&self, code: &str) -> Result<Option<agent::Model>, ServiceError> {
        agent::Entity::find()
            .filter(agent::Column::AgentCode.eq(code))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn insert(&self, m: agent::Model) -> Result<(), ServiceError> {
        let am = agent::ActiveModel {
            agent_code: Set(m.agent_code),
            agent_name: Set(m.agent_name),
            working_area: Set(m.working_area),
            commission: Set(m.commission),
            phone_no: Set(m.phone_no),
            country: Set(m.country),
        };
        agent::Entity::insert(am)
            .exec_without_returning(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(())
    }

    async fn update(&self, code: &str, changes: &AgentChanges) -> Result<bool, ServiceError> {
        let assignments = changes.assignments();
        if assignments.is_empty() {
            return Err(ServiceError::Validation("no updatable fields supplied".into()));
        }

        let mut stmt = agent::Entity::update_many().filter(agent::Column::AgentCode.eq(code));
        for (field, value) in assignments {
            stmt = stmt.col_expr(field.column(), Expr::value(value));
        }
        let res = stmt.exec(&self.db).await.map_err(ServiceError::db)?;
        if res.rows_affected > 0 {
            return Ok(true);
        }

        // MySQL counts changed rows, so an identical write reports zero.
        Ok(self.find(code).await?.is_some())
    }

    async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
        let res = agent::Entity::delete_many()
            .filter(agent::Column::AgentCode.eq(code))
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory repository for tests and doc examples.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockAgentRepository {
        rows: Mutex<BTreeMap<String, agent::Model>>, // key: AGENT_CODE
        broken: bool,
    }

    impl MockAgentRepository {
        /// Every call fails as if the store were unreachable.
        pub fn broken() -> Self {
            Self { rows: Mutex::default(), broken: true }
        }

        pub fn with_rows(rows: impl IntoIterator<Item = agent::Model>) -> Self {
            let rows = rows.into_iter().map(|m| (m.agent_code.clone(), m)).collect();
            Self { rows: Mutex::new(rows), broken: false }
        }

        fn rows(&self) -> Result<MutexGuard<'_, BTreeMap<String, agent::Model>>, ServiceError> {
            if self.broken {
                return Err(ServiceError::Db("connection refused".into()));
            }
            self.rows.lock().map_err(ServiceError::db)
        }
    }

    #[async_trait]
    impl AgentRepository for MockAgentRepository {
        async fn list(&self) -> Result<Vec<agent::Model>, ServiceError> {
            Ok(self.rows()?.values().cloned().collect())
        }

        async fn find(&self, code: &str) -> Result<Option<agent::Model>, ServiceError> {
            Ok(self.rows()?.get(code).cloned())
        }

        async fn insert(&self, m: agent::Model) -> Result<(), ServiceError> {
            let mut rows = self.rows()?;
            if rows.contains_key(&m.agent_code) {
                return Err(ServiceError::Db(format!(
                    "Duplicate entry '{}' for key 'PRIMARY'",
                    m.agent_code
                )));
            }
            rows.insert(m.agent_code.clone(), m);
            Ok(())
        }

        async fn update(&self, code: &str, changes: &AgentChanges) -> Result<bool, ServiceError> {
            let mut rows = self.rows()?;
            match rows.get_mut(code) {
                Some(m) => {
                    changes.apply(m);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
            Ok(self.rows()?.remove(code).is_some())
        }
    }
}
