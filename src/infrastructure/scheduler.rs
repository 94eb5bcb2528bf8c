use crate::domain::scheduler::Scheduler;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Waits on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait::async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Completes every sleep immediately and records what was asked for, so
/// delay-bearing flows run synchronously under test.
#[derive(Debug, Clone, Default)]
pub struct InstantScheduler {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Virtual time that would have elapsed on a real clock
    pub fn elapsed(&self) -> Duration {
        self.requested().into_iter().sum()
    }
}

#[async_trait::async_trait]
impl Scheduler for InstantScheduler {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(duration);
        }
        tokio::task::yield_now().await;
    }
}
