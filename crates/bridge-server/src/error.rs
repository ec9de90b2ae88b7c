use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bridge_core::BridgeError;

/// Body text for 404s on the submit route.
pub const MEMBER_NOT_FOUND: &str = "Current member not found";
/// Body text for every 500. The cause is logged, never returned.
pub const INTERNAL_ERROR: &str = "Internal server error";

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self.0.downcast_ref::<BridgeError>() {
            Some(BridgeError::MemberNotFound(_)) => (StatusCode::NOT_FOUND, MEMBER_NOT_FOUND),
            Some(BridgeError::Config(_))
            | Some(BridgeError::Io(_))
            | Some(BridgeError::Json(_))
            | None => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %format!("{:#}", self.0), "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
