use super::sessions::BookingSessions;
use crate::shared::error::AppError;
use uuid::Uuid;

/// Closes the booking dialog, discarding its drafts
pub struct CloseBookingUseCase {
    sessions: BookingSessions,
}

impl CloseBookingUseCase {
    pub fn new(sessions: BookingSessions) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions.close(id)
    }
}
