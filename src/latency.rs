//! Injectable delay used to mimic network round-trips on local
//! operations. Tests inject [`NoLatency`] and run without timers.

use std::time::Duration;

/// One suspension point per store operation. No cancellation and no
/// timeout; a wait always runs to completion.
#[async_trait::async_trait]
pub trait Latency: Send + Sync + 'static {
    async fn wait(&self, delay: Duration);
}

/// Real delays via the tokio timer.
pub struct SimulatedLatency;

#[async_trait::async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// No-op, for tests.
pub struct NoLatency;

#[async_trait::async_trait]
impl Latency for NoLatency {
    async fn wait(&self, _delay: Duration) {}
}
