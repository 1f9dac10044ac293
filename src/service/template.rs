//! Template use-cases: pass-through to the repository with logging.

use crate::error::AppError;
use crate::model::{Template, TemplatePayload};
use crate::repository::TemplateRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct TemplateService {
    repo: Arc<dyn TemplateRepository>,
}

impl TemplateService {
    pub fn new(repo: Arc<dyn TemplateRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Template>, AppError> {
        self.repo.list().await.inspect_err(|e| {
            tracing::error!(error = %e, "listing templates failed");
        })
    }

    pub async fn get(&self, id: i32) -> Result<Option<Template>, AppError> {
        self.repo.get(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "fetching template failed");
        })
    }

    pub async fn create(&self, payload: &TemplatePayload) -> Result<Template, AppError> {
        let created = self.repo.insert(payload).await.inspect_err(|e| {
            tracing::error!(error = %e, "creating template failed");
        })?;
        tracing::info!(id = created.id, "template created");
        Ok(created)
    }

    /// Returns false when the template does not exist.
    pub async fn update(&self, id: i32, payload: &TemplatePayload) -> Result<bool, AppError> {
        let updated = self.repo.update(id, payload).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "updating template failed");
        })?;
        if updated {
            tracing::info!(id, "template updated");
        } else {
            tracing::warn!(id, "template not found for update");
        }
        Ok(updated)
    }

    /// Returns false when the template does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "deleting template failed");
        })?;
        if deleted {
            tracing::info!(id, "template deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::InMemoryTemplates;

    fn payload(body: &str) -> TemplatePayload {
        TemplatePayload {
            name: "welcome".into(),
            subject: "Welcome!".into(),
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trips() {
        let service = TemplateService::new(Arc::new(InMemoryTemplates::default()));
        let created = service.create(&payload("Hello {0}")).await.unwrap();
        assert_eq!(created.id, 1);

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].body, "Hello {0}");
    }

    #[tokio::test]
    async fn update_missing_template_reports_no_match() {
        let service = TemplateService::new(Arc::new(InMemoryTemplates::default()));
        assert!(!service.update(7, &payload("x")).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let service = TemplateService::new(Arc::new(InMemoryTemplates::default()));
        let created = service.create(&payload("Hello {0}")).await.unwrap();
        assert!(service.delete(created.id).await.unwrap());
        assert!(service.get(created.id).await.unwrap().is_none());
    }
}
