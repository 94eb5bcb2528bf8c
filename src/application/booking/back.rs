use super::sessions::BookingSessions;
use super::workflow::BookingSnapshot;
use crate::shared::error::AppError;
use uuid::Uuid;

pub struct GoBackUseCase {
    sessions: BookingSessions,
}

impl GoBackUseCase {
    pub fn new(sessions: BookingSessions) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: Uuid) -> Result<BookingSnapshot, AppError> {
        self.sessions.with(id, |workflow| -> Result<BookingSnapshot, AppError> {
            workflow.back()?;
            Ok(workflow.snapshot())
        })?
    }
}
