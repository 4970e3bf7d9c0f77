use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::customer::dto::{CustomerRequest, CustomerResponse};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Application service enforcing customer invariants on top of the repository.
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    /// Email uniqueness is checked here, before insert, so callers get a
    /// domain-level conflict instead of a bare unique-index failure.
    pub async fn create(&self, req: &CustomerRequest) -> Result<CustomerResponse, ServiceError> {
        if self.repo.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Conflict("email already registered".into()));
        }
        let now = Utc::now().into();
        let created = self.repo.insert(&req.name, &req.email, now).await?;
        info!(id = created.id, "created customer");
        Ok(created.into())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<CustomerResponse, ServiceError> {
        let found = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        Ok(found.into())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<CustomerResponse, ServiceError> {
        let found = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        Ok(found.into())
    }

    pub async fn find_all(&self) -> Result<Vec<CustomerResponse>, ServiceError> {
        Ok(self.repo.find_all().await?.into_iter().map(Into::into).collect())
    }

    /// Full overwrite of name and email; `created_at` is untouched.
    pub async fn update(&self, id: i64, req: &CustomerRequest) -> Result<CustomerResponse, ServiceError> {
        if let Some(existing) = self.repo.find_by_email(&req.email).await? {
            if existing.id != id {
                return Err(ServiceError::Conflict("email already registered".into()));
            }
        }
        let now = Utc::now().into();
        let updated = self
            .repo
            .update(id, &req.name, &req.email, now)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        info!(id = updated.id, "updated customer");
        Ok(updated.into())
    }

    /// Owned orders are removed by the customer FK cascade.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("customer"));
        }
        info!(id, "deleted customer");
        Ok(())
    }
}
