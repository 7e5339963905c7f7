//! HTTP mapping of handler failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::coach::CoachError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Every coaching failure is a `500 {"detail": ...}` carrying the error text
/// as-is, upstream messages included.
#[derive(Debug)]
pub struct ApiError(pub CoachError);

impl From<CoachError> for ApiError {
    fn from(e: CoachError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
