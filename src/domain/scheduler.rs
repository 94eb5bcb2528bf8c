use std::time::Duration;

/// Source of the simulated delays (payment processing, acknowledgement,
/// form submission). Injected so tests can skip real waiting.
#[async_trait::async_trait]
pub trait Scheduler: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaySettings {
    pub payment_processing: Duration,
    pub booking_acknowledgement: Duration,
    pub mutation: Duration,
}

impl Default for DelaySettings {
    fn default() -> Self {
        Self {
            payment_processing: Duration::from_millis(3000),
            booking_acknowledgement: Duration::from_millis(2000),
            mutation: Duration::from_millis(1000),
        }
    }
}
