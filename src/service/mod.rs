//! Service tier: thin pass-through over repositories, plus the send-message
//! composition and the payload rule checks shared with the middleware.

mod customer;
mod message;
mod template;
pub mod validation;

pub use customer::CustomerService;
pub use message::MessageService;
pub use template::TemplateService;
