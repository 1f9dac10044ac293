//! Send-message handler. The middleware has already checked the query shape.

use crate::error::AppError;
use crate::model::SentMessage;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SendParams {
    pub customer_id: i32,
    pub template_id: i32,
}

pub async fn send(
    State(state): State<AppState>,
    Query(params): Query<SendParams>,
) -> Result<Json<SentMessage>, AppError> {
    let sent = state
        .messages
        .send(params.customer_id, params.template_id)
        .await?;
    Ok(Json(sent))
}
