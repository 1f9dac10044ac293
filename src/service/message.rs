//! Send-message composition: two lookups and a positional-format render.
//! "Sending" is a log line; no mail transport is involved.

use crate::error::AppError;
use crate::model::SentMessage;
use crate::render::format_positional;
use crate::service::{CustomerService, TemplateService};

#[derive(Clone)]
pub struct MessageService {
    customers: CustomerService,
    templates: TemplateService,
}

impl MessageService {
    pub fn new(customers: CustomerService, templates: TemplateService) -> Self {
        Self {
            customers,
            templates,
        }
    }

    /// Render the template body with the customer's name (`{0}`) and email
    /// (`{1}`), log the outgoing message, and return it.
    pub async fn send(&self, customer_id: i32, template_id: i32) -> Result<SentMessage, AppError> {
        tracing::info!(customer_id, template_id, "sending templated message");

        let customer = self.customers.get(customer_id).await?.ok_or_else(|| {
            tracing::warn!(customer_id, "customer not found for message sending");
            AppError::NotFound(format!("Customer {} not found", customer_id))
        })?;
        let template = self.templates.get(template_id).await?.ok_or_else(|| {
            tracing::warn!(template_id, "template not found for message sending");
            AppError::NotFound(format!("Template {} not found", template_id))
        })?;

        let body = format_positional(&template.body, &[&customer.name, &customer.email])
            .map_err(|e| AppError::Render(e.to_string()))?;

        tracing::info!(to = %customer.email, subject = %template.subject, body = %body, "message sent");
        Ok(SentMessage {
            to: customer.email,
            subject: template.subject,
            body,
        })
    }
}
