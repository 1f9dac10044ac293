//! Communication API: layered CRUD backend for customers and message templates.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod render;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Customer, CustomerPayload, SentMessage, Template, TemplatePayload};
pub use repository::{
    CustomerRepository, PgCustomerRepository, PgTemplateRepository, TemplateRepository,
};
pub use routes::{api_routes, common_routes, common_routes_with_ready};
pub use service::{CustomerService, MessageService, TemplateService};
pub use state::AppState;
pub use store::ensure_tables;
