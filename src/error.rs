use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors that can surface to an API caller.
///
/// Transient upstream failures (weather fetch, remote model) are *not* part of
/// this taxonomy: they are always recovered internally with documented
/// fallbacks and never leave the prediction service.
#[derive(Debug, Error)]
pub enum Error {
    /// City has no entry in the coordinate catalog, so weather cannot be
    /// fetched for it.
    #[error("coordinates not found for city: {0}")]
    UnknownCity(String),

    /// A request parameter is outside its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::UnknownCity(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
