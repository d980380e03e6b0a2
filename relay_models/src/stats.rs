/// Snapshot of the process-wide delivery counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    pub attempts: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl DeliveryStats {
    /// Share of attempts that were delivered, formatted as a percentage with
    /// two decimals.
    pub fn success_rate(&self) -> String {
        let rate = match self.attempts {
            0 => 0.0,
            attempts => self.succeeded as f64 / attempts as f64 * 100.0,
        };
        format!("{rate:.2}%")
    }
}
