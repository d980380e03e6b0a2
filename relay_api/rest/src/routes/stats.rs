use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_contact_contracts::ContactService;
use serde::Serialize;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/email-stats", routing::get(get_stats))
        .with_state(service)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    total_attempts: u64,
    successful: u64,
    failed: u64,
    success_rate: String,
}

async fn get_stats(service: State<Arc<impl ContactService>>) -> Response {
    let stats = service.get_stats();

    Json(StatsResponse {
        total_attempts: stats.attempts,
        successful: stats.succeeded,
        failed: stats.failed,
        success_rate: stats.success_rate(),
    })
    .into_response()
}
