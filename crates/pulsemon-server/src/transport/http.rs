//! HTTP handlers.
//!
//! Status mapping:
//! - `InvalidValue`, `UnknownMetricType` -> 400
//! - `NotFound` -> 404
//! - anything else -> 500
//!
//! Paths with missing segments never reach these handlers; the router
//! answers them with its default 404.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use pulsemon_core::error::MetricsError;

use crate::app_state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// `MetricsError` rendered as a plain-text HTTP response.
#[derive(Debug)]
pub struct ApiError(pub MetricsError);

impl From<MetricsError> for ApiError {
    fn from(e: MetricsError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            MetricsError::InvalidValue(_) | MetricsError::UnknownMetricType(_) => {
                StatusCode::BAD_REQUEST
            }
            MetricsError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            self.0.to_string(),
        )
            .into_response()
    }
}

pub async fn update_metric(
    State(state): State<AppState>,
    Path((kind, name, value)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .ingest()
        .handle_update(&kind, &name, &value)
        .inspect_err(|e| {
            let code = e.client_code().as_str();
            tracing::debug!(%kind, %name, %value, code, "update rejected")
        })?;
    tracing::trace!(%kind, %name, %value, "metric updated");
    Ok(StatusCode::OK)
}

pub async fn get_metric(
    State(state): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let body = state.ingest().handle_get(&kind, &name).inspect_err(|e| {
        tracing::debug!(%kind, %name, code = e.client_code().as_str(), "value lookup failed")
    })?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response())
}

pub async fn list_metrics(State(state): State<AppState>) -> Response {
    let body = state.ingest().handle_list();
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}
