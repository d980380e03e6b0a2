use std::time::Duration;

use chrono::{DateTime, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthService: Send + Sync + 'static {
    fn get_status(&self) -> HealthStatus;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub now: DateTime<Utc>,
    /// Time since the service was started
    pub uptime: Duration,
}

#[cfg(feature = "mock")]
impl MockHealthService {
    pub fn with_get_status(mut self, status: HealthStatus) -> Self {
        self.expect_get_status().once().return_const(status);
        self
    }
}
