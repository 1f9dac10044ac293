//! Domain records and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer row. Timestamps are set by the database.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A message template row. `body` is a format string with positional
/// placeholders: `{0}` is the customer name, `{1}` the customer email.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Template {
    pub id: i32,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update body for customers. Fields default to empty so that missing
/// keys surface as validation errors rather than deserialization failures.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Create/update body for templates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TemplatePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// Result of the send-message composition: the rendered outgoing message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}
