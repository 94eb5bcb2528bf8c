use super::forms::PaymentDetails;
use super::sessions::BookingSessions;
use super::workflow::{Acknowledgement, BookingSnapshot};
use crate::domain::scheduler::Scheduler;
use crate::shared::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Saves the card form and runs the simulated payment.
///
/// The session lock is released for the processing delay; the workflow
/// refuses back/close/resubmit meanwhile. The returned acknowledgement
/// is the caller's to fire.
pub struct SubmitPaymentUseCase {
    sessions: BookingSessions,
    scheduler: Arc<dyn Scheduler>,
}

impl SubmitPaymentUseCase {
    pub fn new(sessions: BookingSessions, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            sessions,
            scheduler,
        }
    }

    #[tracing::instrument(skip(self, payment))]
    pub async fn execute(
        &self,
        id: Uuid,
        payment: PaymentDetails,
    ) -> Result<(BookingSnapshot, Acknowledgement), AppError> {
        let processing = self
            .sessions
            .with(id, |workflow| -> Result<Duration, AppError> {
                workflow.update_payment(payment)?;
                Ok(workflow.begin_payment()?)
            })??;

        self.scheduler.sleep(processing).await;

        self.sessions
            .with(id, |workflow| -> Result<_, AppError> {
                let ack = workflow.finish_payment()?;
                Ok((workflow.snapshot(), ack))
            })?
    }
}
