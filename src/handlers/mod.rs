//! HTTP handlers for customer CRUD, template CRUD, and send-message.

pub mod customer;
pub mod message;
pub mod template;
