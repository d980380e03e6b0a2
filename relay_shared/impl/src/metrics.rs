use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use relay_models::stats::DeliveryStats;
use relay_shared_contracts::metrics::DeliveryMetricsService;

/// In-memory counters shared by every clone of the service.
#[derive(Debug, Clone, Default)]
pub struct DeliveryMetricsServiceImpl {
    counters: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    attempts: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl DeliveryMetricsService for DeliveryMetricsServiceImpl {
    fn record_attempt(&self) {
        self.counters.attempts.fetch_add(1, Ordering::Relaxed);
    }

    fn record_success(&self) {
        self.counters.succeeded.fetch_add(1, Ordering::Release);
    }

    fn record_failure(&self) {
        self.counters.failed.fetch_add(1, Ordering::Release);
    }

    fn snapshot(&self) -> DeliveryStats {
        // an outcome is released after its attempt was recorded, so once the
        // outcomes are acquired the attempt load sees at least as many
        let succeeded = self.counters.succeeded.load(Ordering::Acquire);
        let failed = self.counters.failed.load(Ordering::Acquire);
        let attempts = self.counters.attempts.load(Ordering::Relaxed);
        DeliveryStats {
            attempts,
            succeeded,
            failed,
        }
    }
}
