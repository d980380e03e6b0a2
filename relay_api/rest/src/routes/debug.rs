use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_contact_contracts::{ContactService, DeliverySettingsStatus};
use serde::Serialize;

use crate::RestServerConfig;

pub fn router(service: Arc<impl ContactService>, config: Arc<RestServerConfig>) -> Router<()> {
    Router::new()
        .route("/debug-env", routing::get(get_delivery_settings))
        .with_state((service, config))
}

/// Secrets are only reported as present or absent.
#[derive(Serialize)]
struct DebugEnvResponse {
    mode: &'static str,
    host: Option<String>,
    port: Option<u16>,
    user: bool,
    password: bool,
    recipient: bool,
}

async fn get_delivery_settings(
    State((service, config)): State<(Arc<impl ContactService>, Arc<RestServerConfig>)>,
) -> Response {
    let DeliverySettingsStatus {
        host,
        port,
        user,
        password,
        recipient,
    } = service.get_delivery_settings();

    Json(DebugEnvResponse {
        mode: if config.development {
            "development"
        } else {
            "production"
        },
        host,
        port,
        user,
        password,
        recipient,
    })
    .into_response()
}
