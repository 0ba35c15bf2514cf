use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// HTTP-facing wrapper around [`ServiceError`]. Every failure leaving a
/// handler goes through its `IntoResponse` impl, so the body is always a
/// JSON object with a `message` field:
/// - `InvalidInput` -> 400 with the validation message
/// - `NotFound` -> 404 with the fixed message "Not found"
/// - `Storage` -> 500, never a silent 200
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    pub fn invalid_input(msg: &str) -> Self {
        Self(ServiceError::InvalidInput(msg.to_string()))
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            ServiceError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ServiceError::Storage(msg) => {
                error!(error = %msg, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(serde_json::json!({"message": message}))).into_response()
    }
}
