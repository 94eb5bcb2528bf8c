use crate::domain::schedule::{DayOfWeek, ScheduleRepository, ScheduleSlot};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListScheduleUseCase {
    repo: Arc<dyn ScheduleRepository>,
}

impl ListScheduleUseCase {
    pub fn new(repo: Arc<dyn ScheduleRepository>) -> Self {
        Self { repo }
    }

    /// Slots in stored order, optionally narrowed to one day
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, day: Option<DayOfWeek>) -> Result<Vec<ScheduleSlot>, AppError> {
        let slots = self.repo.list().await?;
        Ok(match day {
            Some(day) => slots.into_iter().filter(|s| s.day == day).collect(),
            None => slots,
        })
    }
}
