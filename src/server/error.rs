use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::core::QueryError;

/// Errors returned to API clients as `{"error": ...}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("{0}")]
    BadQuery(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadQuery(rejection.body_text())
    }
}

impl From<&ApiError> for StatusCode {
    fn from(err: &ApiError) -> Self {
        match err {
            // An empty store is reported in the body of a successful response.
            ApiError::Query(QueryError::EmptyStore) => StatusCode::OK,
            ApiError::Query(QueryError::InvalidRange { .. }) => StatusCode::BAD_REQUEST,
            ApiError::BadQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
