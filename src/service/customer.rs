//! Customer use-cases: pass-through to the repository with logging.

use crate::error::AppError;
use crate::model::{Customer, CustomerPayload};
use crate::repository::CustomerRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.repo.list().await.inspect_err(|e| {
            tracing::error!(error = %e, "listing customers failed");
        })
    }

    pub async fn get(&self, id: i32) -> Result<Option<Customer>, AppError> {
        self.repo.get(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "fetching customer failed");
        })
    }

    pub async fn create(&self, payload: &CustomerPayload) -> Result<Customer, AppError> {
        let created = self.repo.insert(payload).await.inspect_err(|e| {
            tracing::error!(error = %e, "creating customer failed");
        })?;
        tracing::info!(id = created.id, "customer created");
        Ok(created)
    }

    /// Returns false when the customer does not exist.
    pub async fn update(&self, id: i32, payload: &CustomerPayload) -> Result<bool, AppError> {
        let updated = self.repo.update(id, payload).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "updating customer failed");
        })?;
        if updated {
            tracing::info!(id, "customer updated");
        } else {
            tracing::warn!(id, "customer not found for update");
        }
        Ok(updated)
    }

    /// Returns false when the customer does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "deleting customer failed");
        })?;
        if deleted {
            tracing::info!(id, "customer deleted");
        }
        Ok(deleted)
    }
}
