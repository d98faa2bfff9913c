pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use ddwatch_core::config::Config;
use tower_http::trace::TraceLayer;

/// Build the axum Router with all routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(config: Config) -> Router {
    let app_state = state::AppState::new(config);

    Router::new()
        // ddclient log
        .route(
            "/last_update_status",
            get(routes::status::last_update_status),
        )
        .route(
            "/last_update_timestamp",
            get(routes::status::last_update_timestamp),
        )
        .route("/last_update_ip", get(routes::status::last_update_ip))
        // healthcheck log
        .route(
            "/last_healthcheck_status",
            get(routes::status::last_healthcheck_status),
        )
        .route(
            "/last_healthcheck_timestamp",
            get(routes::status::last_healthcheck_timestamp),
        )
        .route("/last_healthcheck", get(routes::status::last_healthcheck))
        .route("/status", get(routes::status::status))
        // Trigger
        .route("/run_ddclient", post(routes::run::run_ddclient))
        // Docs
        .route("/openapi.json", get(routes::docs::openapi))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Serve the API on a pre-bound listener until the future is dropped.
///
/// Taking a bound `TcpListener` lets the caller read the actual port first
/// (useful when port 0 lets the OS pick one).
pub async fn serve_on(config: Config, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        ddclient_log = %config.ddclient_log.display(),
        healthcheck_log = %config.healthcheck_log.display(),
        "using log files"
    );
    let app = build_router(config);

    tracing::info!("ddwatch listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
