use axum::extract::State;
use axum::Json;
use ddwatch_core::field::Field;
use ddwatch_core::status::StatusReport;
use serde_json::{Map, Value};

use crate::{error::AppError, state::AppState};

/// Look up one field off the async runtime and render it to its wire string.
async fn render_field(app: &AppState, field: Field) -> Result<String, AppError> {
    let config = app.config.clone();
    tokio::task::spawn_blocking(move || field.lookup(&config).render(field))
        .await
        .map_err(AppError::join)
}

fn single(key: &str, value: String) -> Json<Value> {
    let mut body = Map::new();
    body.insert(key.to_string(), Value::String(value));
    Json(Value::Object(body))
}

async fn field_response(app: &AppState, field: Field) -> Result<Json<Value>, AppError> {
    let value = render_field(app, field).await?;
    Ok(single(field.json_key(), value))
}

// ---------------------------------------------------------------------------
// ddclient log
// ---------------------------------------------------------------------------

/// GET /last_update_status
pub async fn last_update_status(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    field_response(&app, Field::UpdateStatus).await
}

/// GET /last_update_timestamp
pub async fn last_update_timestamp(
    State(app): State<AppState>,
) -> Result<Json<Value>, AppError> {
    field_response(&app, Field::UpdateTimestamp).await
}

/// GET /last_update_ip
pub async fn last_update_ip(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    field_response(&app, Field::UpdateIp).await
}

// ---------------------------------------------------------------------------
// healthcheck log
// ---------------------------------------------------------------------------

/// GET /last_healthcheck_status
pub async fn last_healthcheck_status(
    State(app): State<AppState>,
) -> Result<Json<Value>, AppError> {
    field_response(&app, Field::HealthcheckStatus).await
}

/// GET /last_healthcheck_timestamp
pub async fn last_healthcheck_timestamp(
    State(app): State<AppState>,
) -> Result<Json<Value>, AppError> {
    field_response(&app, Field::HealthcheckTimestamp).await
}

/// GET /last_healthcheck — health-check status for logs written in the older
/// `[TS] | STATUS` layout.
pub async fn last_healthcheck(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    field_response(&app, Field::LegacyHealthcheckStatus).await
}

// ---------------------------------------------------------------------------
// combined
// ---------------------------------------------------------------------------

/// GET /status — all five fields in one response.
pub async fn status(State(app): State<AppState>) -> Result<Json<StatusReport>, AppError> {
    let config = app.config.clone();
    let report = tokio::task::spawn_blocking(move || StatusReport::collect(&config))
        .await
        .map_err(AppError::join)?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddwatch_core::config::Config;

    fn state_in(dir: &tempfile::TempDir) -> AppState {
        AppState::new(Config {
            ddclient_log: dir.path().join("ddclient.log"),
            healthcheck_log: dir.path().join("healthcheck.log"),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn update_status_handler_reads_log() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = state_in(&dir);
        std::fs::write(
            &app.config.ddclient_log,
            "[DDCLIENT] | [2024-01-01_12:00:00]: SUCCESS: IP address set to 203.0.113.5\n",
        )
        .unwrap();

        let Json(body) = last_update_status(State(app)).await.unwrap();
        assert_eq!(body, serde_json::json!({ "last_update_status": "SUCCESS" }));
    }

    #[tokio::test]
    async fn legacy_healthcheck_reads_older_layout() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = state_in(&dir);
        std::fs::write(&app.config.healthcheck_log, "[2024-01-01_12:00:05] | OK\n").unwrap();

        let Json(body) = last_healthcheck(State(app)).await.unwrap();
        assert_eq!(body, serde_json::json!({ "last_healthcheck": "OK" }));
    }

    #[tokio::test]
    async fn legacy_healthcheck_ignores_current_layout() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = state_in(&dir);
        std::fs::write(
            &app.config.healthcheck_log,
            "[HEALTHCHECK] | [2024-01-01_12:00:05]: OK\n",
        )
        .unwrap();

        let Json(body) = last_healthcheck(State(app)).await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "last_healthcheck": "No status found" })
        );
    }

    #[tokio::test]
    async fn missing_logs_render_sentinels() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = state_in(&dir);

        let Json(report) = status(State(app)).await.unwrap();
        assert_eq!(report.last_update_status, "No status found");
        assert_eq!(report.last_update_timestamp, "No timestamp found");
        assert_eq!(report.last_update_ip, "No IP address found");
        assert_eq!(report.last_healthcheck_status, "No status found");
        assert_eq!(report.last_healthcheck_timestamp, "No timestamp found");
    }
}
