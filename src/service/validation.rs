//! Payload and parameter rule checks. Each check collects every violated rule
//! so a response can report them all at once.

use crate::model::{CustomerPayload, TemplatePayload};
use once_cell::sync::Lazy;
use regex::Regex;

const NAME_MAX: usize = 100;
const SUBJECT_MAX: usize = 200;
const BODY_MAX: usize = 2000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Rules for a customer create/update body.
pub fn validate_customer(payload: &CustomerPayload) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push("customer name is required".to_string());
    } else if payload.name.chars().count() > NAME_MAX {
        errors.push(format!("customer name cannot exceed {} characters", NAME_MAX));
    }
    if payload.email.trim().is_empty() {
        errors.push("customer email is required".to_string());
    } else if !EMAIL_RE.is_match(&payload.email) {
        errors.push("customer email format is invalid".to_string());
    }
    errors
}

/// Rules for a template create/update body.
pub fn validate_template(payload: &TemplatePayload) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push("template name is required".to_string());
    } else if payload.name.chars().count() > NAME_MAX {
        errors.push(format!("template name cannot exceed {} characters", NAME_MAX));
    }
    if payload.subject.trim().is_empty() {
        errors.push("template subject is required".to_string());
    } else if payload.subject.chars().count() > SUBJECT_MAX {
        errors.push(format!(
            "template subject cannot exceed {} characters",
            SUBJECT_MAX
        ));
    }
    if payload.body.trim().is_empty() {
        errors.push("template body is required".to_string());
    } else if payload.body.chars().count() > BODY_MAX {
        errors.push(format!("template body cannot exceed {} characters", BODY_MAX));
    }
    errors
}

/// Identifiers must be positive.
pub fn validate_id(id: i64) -> Vec<String> {
    if id <= 0 {
        vec!["id must be greater than 0".to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, email: &str) -> CustomerPayload {
        CustomerPayload {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn template(name: &str, subject: &str, body: &str) -> TemplatePayload {
        TemplatePayload {
            name: name.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn valid_customer_passes() {
        assert!(validate_customer(&customer("Ada", "ada@example.com")).is_empty());
    }

    #[test]
    fn empty_customer_reports_both_fields() {
        let errors = validate_customer(&customer("", ""));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("name is required"));
        assert!(errors[1].contains("email is required"));
    }

    #[test]
    fn overlong_customer_name_is_rejected() {
        let errors = validate_customer(&customer(&"x".repeat(101), "a@b.co"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("cannot exceed 100"));
    }

    #[test]
    fn bad_email_shapes_are_rejected() {
        for email in ["nope", "a@b", "a @b.co", "@b.co", "a@.co"] {
            let errors = validate_customer(&customer("Ada", email));
            assert_eq!(errors.len(), 1, "email {:?} should fail", email);
            assert!(errors[0].contains("email format is invalid"));
        }
    }

    #[test]
    fn valid_template_passes() {
        assert!(validate_template(&template("welcome", "Hi", "Hello {0}")).is_empty());
    }

    #[test]
    fn empty_template_reports_all_three_fields() {
        let errors = validate_template(&template("", "", ""));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn template_length_caps_apply() {
        let errors = validate_template(&template(
            &"n".repeat(101),
            &"s".repeat(201),
            &"b".repeat(2001),
        ));
        assert_eq!(errors.len(), 3);
        assert!(errors[1].contains("cannot exceed 200"));
        assert!(errors[2].contains("cannot exceed 2000"));
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(validate_id(1).is_empty());
        assert_eq!(validate_id(0).len(), 1);
        assert_eq!(validate_id(-3).len(), 1);
    }
}
