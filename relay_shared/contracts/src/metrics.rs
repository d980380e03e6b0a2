use relay_models::stats::DeliveryStats;

/// Sink for the process-wide delivery counters.
///
/// Counters only ever grow and are reset when the process restarts.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DeliveryMetricsService: Send + Sync + 'static {
    /// A contact form submission was received.
    fn record_attempt(&self);

    /// A message was accepted by the relay.
    fn record_success(&self);

    /// A message could not be delivered, either because the delivery
    /// settings are incomplete or because the relay failed.
    fn record_failure(&self);

    fn snapshot(&self) -> DeliveryStats;
}

#[cfg(feature = "mock")]
impl MockDeliveryMetricsService {
    pub fn with_record_attempt(mut self) -> Self {
        self.expect_record_attempt().once().return_const(());
        self
    }

    pub fn with_record_success(mut self) -> Self {
        self.expect_record_success().once().return_const(());
        self
    }

    pub fn with_record_failure(mut self) -> Self {
        self.expect_record_failure().once().return_const(());
        self
    }

    pub fn with_snapshot(mut self, stats: DeliveryStats) -> Self {
        self.expect_snapshot().once().return_const(stats);
        self
    }
}
