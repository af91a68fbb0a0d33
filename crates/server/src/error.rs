use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use propbot_core::EngineError;

/// HTTP wrapper for engine errors. Input problems map to 400, a missing
/// listing to 404, catalog failures to 502.
pub struct ApiError(pub EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EngineError::EmptyQuery | EngineError::InvalidSuggestion(_) => StatusCode::BAD_REQUEST,
            EngineError::ListingNotFound(_) => StatusCode::NOT_FOUND,
            EngineError::Catalog(_) => StatusCode::BAD_GATEWAY,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
