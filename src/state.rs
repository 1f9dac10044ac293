//! Shared application state for all routes.

use crate::repository::{PgCustomerRepository, PgTemplateRepository};
use crate::service::{CustomerService, MessageService, TemplateService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Kept for the readiness probe.
    pub pool: PgPool,
    pub customers: CustomerService,
    pub templates: TemplateService,
    pub messages: MessageService,
}

impl AppState {
    /// Wire the Postgres repositories into services.
    pub fn new(pool: PgPool) -> Self {
        let customers = CustomerService::new(Arc::new(PgCustomerRepository::new(pool.clone())));
        let templates = TemplateService::new(Arc::new(PgTemplateRepository::new(pool.clone())));
        let messages = MessageService::new(customers.clone(), templates.clone());
        AppState {
            pool,
            customers,
            templates,
            messages,
        }
    }
}
