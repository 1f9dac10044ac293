//! Repository traits and their PostgreSQL implementations.

mod customer;
mod template;

pub use customer::{CustomerRepository, PgCustomerRepository};
pub use template::{PgTemplateRepository, TemplateRepository};

#[cfg(test)]
pub(crate) mod test_support;
