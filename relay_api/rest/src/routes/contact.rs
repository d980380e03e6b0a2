use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use tracing::debug;

use super::{error, INTERNAL_SERVER_ERROR};
use crate::{
    models::{contact::ApiContactSubmission, ApiResult},
    RestServerConfig,
};

pub fn router(service: Arc<impl ContactService>, config: Arc<RestServerConfig>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state((service, config))
}

async fn send_message(
    State((service, config)): State<(Arc<impl ContactService>, Arc<RestServerConfig>)>,
    submission: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match submission {
        Ok(submission) => submission,
        Err(rejection) => {
            debug!("rejected contact form request body: {rejection}");
            return error(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match service.send_message(submission.into()).await {
        Ok(receipt) => Json(ApiResult::success("Message sent!", receipt.message_id)).into_response(),
        Err(ContactSendMessageError::Validation(err)) => {
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(ContactSendMessageError::Config(_)) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email configuration missing. Please check environment variables.",
        ),
        Err(ContactSendMessageError::Delivery(err)) => {
            let detail = if config.development {
                err.to_string()
            } else {
                INTERNAL_SERVER_ERROR.into()
            };
            let result =
                ApiResult::failure("Failed to send email. Please try again later.").with_error(detail);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response()
        }
    }
}
