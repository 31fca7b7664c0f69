//! Timing helpers for latency-shaped test scenarios.

use std::time::Duration;

/// Sleep for `millis` milliseconds of (possibly virtual) tokio time.
pub async fn wait(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}
