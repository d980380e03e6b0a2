use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResult;

pub mod contact;
pub mod debug;
pub mod health;
pub mod index;
pub mod stats;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn error(code: StatusCode, message: impl Into<Cow<'static, str>>) -> Response {
    (code, Json(ApiResult::failure(message))).into_response()
}
