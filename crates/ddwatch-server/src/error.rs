use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures outside the status contract, such as a panicked blocking task.
///
/// Log and ddclient failures never reach this type: those are rendered into
/// the normal 200 response body by the handlers.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn join(err: tokio::task::JoinError) -> Self {
        Self(anyhow::anyhow!("task join error: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
