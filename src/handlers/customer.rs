//! Customer CRUD handlers.

use crate::error::AppError;
use crate::model::{Customer, CustomerPayload};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = state.customers.list().await?;
    Ok(Json(customers))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Customer>, AppError> {
    let customer = state
        .customers
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;
    Ok(Json(customer))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let created = state.customers.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CustomerPayload>,
) -> Result<StatusCode, AppError> {
    if !state.customers.update(id, &payload).await? {
        return Err(AppError::NotFound(format!("Customer {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.customers.delete(id).await? {
        return Err(AppError::NotFound(format!("Customer {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
