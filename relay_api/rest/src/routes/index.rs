use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_health_contracts::HealthService;
use serde::Serialize;

use crate::RestServerConfig;

pub fn router(service: Arc<impl HealthService>, config: Arc<RestServerConfig>) -> Router<()> {
    Router::new()
        .route("/", routing::get(index))
        .with_state((service, config))
}

#[derive(Serialize)]
struct IndexResponse {
    message: String,
    status: &'static str,
    timestamp: String,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    contact: &'static str,
    health: &'static str,
    stats: &'static str,
    debug: &'static str,
}

async fn index(
    State((service, config)): State<(Arc<impl HealthService>, Arc<RestServerConfig>)>,
) -> Response {
    let status = service.get_status();

    Json(IndexResponse {
        message: format!("{} API is running!", config.service_name),
        status: "success",
        timestamp: status.now.to_rfc3339(),
        endpoints: Endpoints {
            contact: "POST /contact",
            health: "GET /health",
            stats: "GET /email-stats",
            debug: "GET /debug-env",
        },
    })
    .into_response()
}
