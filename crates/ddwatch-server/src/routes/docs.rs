use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /openapi.json — the document assembled at startup.
pub async fn openapi(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(app.openapi.as_ref().clone())
}
