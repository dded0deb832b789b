use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use super::error::ApiError;
use super::state::AppState;
use crate::core::NameRecord;

/// Query string of `GET /api`
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: i64,
    pub to: i64,
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    "names server is running"
}

/// GET /api/name - One name picked at random
pub async fn random_name(State(state): State<AppState>) -> Result<Json<NameRecord>, ApiError> {
    let name = state.names().random()?;
    Ok(Json(name.clone()))
}

/// GET /api?from=&to= - Names at 1-based positions from..=to
pub async fn name_range(
    State(state): State<AppState>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Result<Json<Vec<NameRecord>>, ApiError> {
    let Query(RangeParams { from, to }) = params?;

    let names = state.names().range(from, to).map_err(|e| {
        tracing::debug!(from, to, len = state.names().store().len(), "rejected range");
        e
    })?;

    Ok(Json(names.to_vec()))
}
