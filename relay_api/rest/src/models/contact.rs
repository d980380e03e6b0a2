use relay_models::contact::ContactSubmission;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    /// First name of the sender
    pub first_name: Option<String>,
    /// Last name of the sender
    pub last_name: Option<String>,
    /// Email address replies should go to
    pub email: Option<String>,
    /// Content of the message
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            message: value.message,
        }
    }
}
