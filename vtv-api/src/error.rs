//! Mapping of service errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use vtv_core::VtvError;
use vtv_services::NewsServiceError;

/// Error returned by API handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] VtvError),

    #[error(transparent)]
    News(#[from] NewsServiceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(VtvError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(VtvError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::News(NewsServiceError::InvalidDate(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request failed ({}): {}", status, self);
        (
            status,
            Json(serde_json::json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}
