use std::borrow::Cow;

use serde::Serialize;

pub mod contact;

/// Body of every response to a form submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult {
    pub success: bool,
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResult {
    pub fn success(message: impl Into<Cow<'static, str>>, message_id: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            message_id: None,
            error: None,
        }
    }

    pub fn with_error(self, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..self
        }
    }
}
