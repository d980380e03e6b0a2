use std::future::Future;

use relay_models::{
    contact::{ContactSubmission, ContactSubmissionError},
    stats::DeliveryStats,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate a contact form submission and forward it to the configured
    /// recipient.
    ///
    /// Every call sends a new email, identical submissions are not
    /// deduplicated.
    fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<DeliveryReceipt, ContactSendMessageError>> + Send;

    /// Return the delivery counters since the process started.
    fn get_stats(&self) -> DeliveryStats;

    /// Return which delivery settings are present, without their secret
    /// values.
    fn get_delivery_settings(&self) -> DeliverySettingsStatus;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverySettingsStatus {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: bool,
    pub password: bool,
    pub recipient: bool,
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error(transparent)]
    Validation(#[from] ContactSubmissionError),
    #[error("Email configuration missing: {}", .0.join(", "))]
    Config(Vec<&'static str>),
    #[error("Failed to send message: {0}")]
    Delivery(anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(
        mut self,
        submission: ContactSubmission,
        result: Result<DeliveryReceipt, ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_stats(mut self, stats: DeliveryStats) -> Self {
        self.expect_get_stats().once().return_const(stats);
        self
    }

    pub fn with_get_delivery_settings(mut self, status: DeliverySettingsStatus) -> Self {
        self.expect_get_delivery_settings()
            .once()
            .return_const(status);
        self
    }
}
