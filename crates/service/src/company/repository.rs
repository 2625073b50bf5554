use async_trait::async_trait;
use models::company;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError>;
    async fn insert(&self, company: company::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        company::Entity::find().all(&self.db).await.map_err(ServiceError::db)
    }

    async fn insert(&self, m: company::Model) -> Result<(), ServiceError> {
        let am = company::ActiveModel {
            company_id: Set(m.company_id),
            company_name: Set(m.company_name),
            company_city: Set(m.company_city),
        };
        company::Entity::insert(am)
            .exec_without_returning(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(())
    }
}

/// In-memory repository for tests.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCompanyRepository {
        rows: Mutex<BTreeMap<i32, company::Model>>, // key: COMPANY_ID
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
            let rows = self.rows.lock().map_err(ServiceError::db)?;
            Ok(rows.values().cloned().collect())
        }

        async fn insert(&self, m: company::Model) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().map_err(ServiceError::db)?;
            if rows.contains_key(&m.company_id) {
                return Err(ServiceError::Db(format!(
                    "Duplicate entry '{}' for key 'PRIMARY'",
                    m.company_id
                )));
            }
            rows.insert(m.company_id, m);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn insert_binds_all_three_columns() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .into_connection();
        let repo = SeaOrmCompanyRepository { db: db.clone() };
        repo.insert(company::Model {
            company_id: 18,
            company_name: "Order All".into(),
            company_city: "Boston".into(),
        })
        .await
        .unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(
            log.contains("INSERT INTO `company` (`COMPANY_ID`, `COMPANY_NAME`, `COMPANY_CITY`) VALUES (?, ?, ?)"),
            "{log}"
        );
    }

    #[tokio::test]
    async fn list_reads_rows() {
        let row = company::Model { company_id: 19, company_name: "Jack Hill Ltd".into(), company_city: "London".into() };
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let repo = SeaOrmCompanyRepository { db };
        assert_eq!(repo.list().await.unwrap(), vec![row]);
    }
}
