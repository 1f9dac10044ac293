//! Inspects route/query parameters and re-parses POST/PUT bodies before they
//! reach handlers. On failure the request is short-circuited with 400 and a
//! list of every rule violated; on success the buffered body is handed back
//! to the handler unchanged.

use crate::error::AppError;
use crate::model::{CustomerPayload, TemplatePayload};
use crate::service::validation::{validate_customer, validate_id, validate_template};
use axum::{
    body::Body,
    extract::{Query, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

/// Cap for buffered request bodies; the API router enforces the same limit.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub async fn validate_request(req: Request, next: Next) -> Result<Response, AppError> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "validating request");

    let mut errors = path_id_errors(&path);

    if path.ends_with("/messages/send") {
        let params = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map(|Query(p)| p)
            .unwrap_or_default();
        errors.extend(send_query_errors(&params));
    }

    if !errors.is_empty() {
        tracing::warn!(%method, %path, ?errors, "request validation failed");
        return Err(AppError::Validation { errors });
    }

    let req = if matches!(method, Method::POST | Method::PUT) {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES)
            .await
            .map_err(|_| AppError::BadRequest("failed to read request body".into()))?;

        if !bytes.is_empty() {
            let body_errors = body_errors(&path, &bytes);
            if !body_errors.is_empty() {
                tracing::warn!(%method, %path, errors = ?body_errors, "request body validation failed");
                return Err(AppError::Validation {
                    errors: body_errors,
                });
            }
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        req
    };

    Ok(next.run(req).await)
}

/// Id segments directly after `/customers` or `/templates` must be positive
/// integers.
fn path_id_errors(path: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    for resource in ["customers", "templates"] {
        if let Some(i) = segments.iter().position(|s| *s == resource) {
            if let Some(id_str) = segments.get(i + 1) {
                match id_str.parse::<i64>() {
                    Ok(id) => errors.extend(validate_id(id)),
                    Err(_) => errors.push("invalid id format in path".to_string()),
                }
            }
        }
    }
    errors
}

/// `/messages/send` requires positive integral `customer_id` and `template_id`.
fn send_query_errors(params: &HashMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();
    match (params.get("customer_id"), params.get("template_id")) {
        (Some(c), Some(t)) => match (c.parse::<i64>(), t.parse::<i64>()) {
            (Ok(c), Ok(t)) => {
                errors.extend(validate_id(c));
                errors.extend(validate_id(t));
            }
            _ => errors.push("invalid customer_id or template_id format".to_string()),
        },
        _ => errors.push("customer_id and template_id are required for send".to_string()),
    }
    errors
}

fn body_errors(path: &str, bytes: &[u8]) -> Vec<String> {
    if path.contains("/customers") {
        match serde_json::from_slice::<CustomerPayload>(bytes) {
            Ok(payload) => validate_customer(&payload),
            Err(_) => vec!["invalid JSON format for customer".to_string()],
        }
    } else if path.contains("/templates") {
        match serde_json::from_slice::<TemplatePayload>(bytes) {
            Ok(payload) => validate_template(&payload),
            Err(_) => vec!["invalid JSON format for template".to_string()],
        }
    } else {
        Vec::new()
    }
}
