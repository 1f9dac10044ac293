//! In-memory repositories for service tests. Ids are assigned sequentially
//! starting at 1, like the SERIAL columns they stand in for.

use crate::error::AppError;
use crate::model::{Customer, CustomerPayload, Template, TemplatePayload};
use crate::repository::{CustomerRepository, TemplateRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCustomers {
    rows: Mutex<Vec<Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Customer>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, payload: &CustomerPayload) -> Result<Customer, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let row = Customer {
            id: rows.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            name: payload.name.clone(),
            email: payload.email.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, payload: &CustomerPayload) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                row.name = payload.name.clone();
                row.email = payload.email.clone();
                row.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryTemplates {
    rows: Mutex<Vec<Template>>,
}

#[async_trait]
impl TemplateRepository for InMemoryTemplates {
    async fn list(&self) -> Result<Vec<Template>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Template>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, payload: &TemplatePayload) -> Result<Template, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let row = Template {
            id: rows.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            name: payload.name.clone(),
            subject: payload.subject.clone(),
            body: payload.body.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, payload: &TemplatePayload) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|t| t.id == id) {
            Some(row) => {
                row.name = payload.name.clone();
                row.subject = payload.subject.clone();
                row.body = payload.body.clone();
                row.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}
