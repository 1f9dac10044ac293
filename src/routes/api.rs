//! API routes: customer CRUD, template CRUD, send-message. The validation
//! middleware and the body size limit sit in front of every handler here.

use crate::handlers::{customer, message, template};
use crate::middleware::{validate_request, BODY_LIMIT_BYTES};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(customer::list).post(customer::create))
        .route(
            "/customers/:id",
            get(customer::read)
                .put(customer::update)
                .delete(customer::delete),
        )
        .route("/templates", get(template::list).post(template::create))
        .route(
            "/templates/:id",
            get(template::read)
                .put(template::update)
                .delete(template::delete),
        )
        .route("/messages/send", post(message::send))
        .layer(axum::middleware::from_fn(validate_request))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
