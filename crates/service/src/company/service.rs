use std::sync::Arc;

use models::company;
use tracing::{info, instrument};

use super::domain::CreateCompanyInput;
use super::repository::CompanyRepository;
use crate::errors::ServiceError;

#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, input), fields(company_id = input.company_id))]
    pub async fn create(&self, input: CreateCompanyInput) -> Result<company::Model, ServiceError> {
        let model = company::Model::from(input);
        self.repo.insert(model.clone()).await?;
        info!("company_created");
        Ok(model)
    }
}
