//! Readiness check backed by the configured storage.

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Readiness endpoint. Pings PostgreSQL when it is configured; the
/// in-memory catalog is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        checks.push((
            "database",
            Box::pin(async move {
                database::postgres::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ));
    }

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}
