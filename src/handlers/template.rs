//! Template CRUD handlers.

use crate::error::AppError;
use crate::model::{Template, TemplatePayload};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Template>>, AppError> {
    let templates = state.templates.list().await?;
    Ok(Json(templates))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Template>, AppError> {
    let template = state
        .templates
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template {} not found", id)))?;
    Ok(Json(template))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TemplatePayload>,
) -> Result<(StatusCode, Json<Template>), AppError> {
    let created = state.templates.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TemplatePayload>,
) -> Result<StatusCode, AppError> {
    if !state.templates.update(id, &payload).await? {
        return Err(AppError::NotFound(format!("Template {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.templates.delete(id).await? {
        return Err(AppError::NotFound(format!("Template {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
