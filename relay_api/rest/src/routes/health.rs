use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_health_contracts::HealthService;
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    /// Seconds since the server was started
    uptime: f64,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let status = service.get_status();

    Json(HealthResponse {
        status: "healthy",
        uptime: status.uptime.as_secs_f64(),
    })
    .into_response()
}
