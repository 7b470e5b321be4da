//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(transport::http::list_metrics))
        .route("/update/:kind/:name/:value", post(transport::http::update_metric))
        .route("/value/:kind/:name", get(transport::http::get_metric))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
