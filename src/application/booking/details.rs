use super::forms::BookingDetails;
use super::sessions::BookingSessions;
use super::workflow::BookingSnapshot;
use crate::shared::error::AppError;
use uuid::Uuid;

/// Saves the Details draft and submits it; rejected drafts stay saved
pub struct SubmitDetailsUseCase {
    sessions: BookingSessions,
}

impl SubmitDetailsUseCase {
    pub fn new(sessions: BookingSessions) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(skip(self, details))]
    pub async fn execute(
        &self,
        id: Uuid,
        details: BookingDetails,
    ) -> Result<BookingSnapshot, AppError> {
        self.sessions.with(id, |workflow| -> Result<BookingSnapshot, AppError> {
            workflow.update_details(details)?;
            workflow.submit_details()?;
            Ok(workflow.snapshot())
        })?
    }
}
