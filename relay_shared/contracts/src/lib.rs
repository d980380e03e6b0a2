pub mod metrics;
pub mod time;
