use axum::extract::State;
use axum::Json;
use ddwatch_core::trigger::run_update_client;
use serde::Serialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub output: String,
}

/// POST /run_ddclient — run ddclient once and append its output to the log.
///
/// Spawn and write failures are reported in `output` with a 200 status, the
/// same channel as a successful run.
pub async fn run_ddclient(State(app): State<AppState>) -> Result<Json<RunResponse>, AppError> {
    // The guard moves into the blocking task so it outlives a cancelled
    // request for as long as ddclient is still running.
    let guard = app.trigger_lock.clone().lock_owned().await;
    let config = app.config.clone();

    let output = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        match run_update_client(&config) {
            Ok(outcome) => outcome.output,
            Err(e) => {
                tracing::warn!(error = %e, "ddclient run failed");
                e.to_string()
            }
        }
    })
    .await
    .map_err(AppError::join)?;

    Ok(Json(RunResponse { output }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddwatch_core::config::Config;

    #[tokio::test]
    async fn spawn_failure_is_reported_in_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = AppState::new(Config {
            ddclient_log: dir.path().join("ddclient.log"),
            ddclient_bin: dir.path().join("no-such-ddclient"),
            ..Config::default()
        });

        let Json(body) = run_ddclient(State(app.clone())).await.unwrap();
        assert!(
            body.output.starts_with("failed to run"),
            "got: {}",
            body.output
        );
        assert!(!app.config.ddclient_log.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn cancelled_request_keeps_later_runs_waiting() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let trace = dir.path().join("trace");
        let bin = dir.path().join("ddclient");
        std::fs::write(
            &bin,
            format!(
                "#!/bin/sh\necho start >> {0}\nsleep 0.5\necho end >> {0}\necho SUCCESS: done\n",
                trace.display()
            ),
        )
        .unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        let app = AppState::new(Config {
            ddclient_log: dir.path().join("ddclient.log"),
            ddclient_bin: bin,
            ..Config::default()
        });

        // Drop the first request while ddclient is still running.
        let first = tokio::spawn(run_ddclient(State(app.clone())));
        tokio::time::sleep(std::time::Duration::from_millis(150)).await;
        first.abort();
        let _ = first.await;

        let Json(body) = run_ddclient(State(app.clone())).await.unwrap();
        assert_eq!(body.output, "SUCCESS: done");

        let runs = std::fs::read_to_string(&trace).unwrap();
        assert_eq!(runs, "start\nend\nstart\nend\n", "runs overlapped");
    }
}
