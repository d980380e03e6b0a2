use chrono::{DateTime, Utc};
use relay_core_health_contracts::{HealthService, HealthStatus};
use relay_shared_contracts::time::TimeService;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Time> {
    time: Time,
    started_at: DateTime<Utc>,
}

impl<Time> HealthServiceImpl<Time>
where
    Time: TimeService,
{
    /// Create the service, counting uptime from now.
    pub fn new(time: Time) -> Self {
        let started_at = time.now();
        Self { time, started_at }
    }
}

impl<Time> HealthService for HealthServiceImpl<Time>
where
    Time: TimeService,
{
    fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        HealthStatus {
            now,
            uptime: (now - self.started_at).to_std().unwrap_or_default(),
        }
    }
}
