use crate::domain::notifications::{Notification, Notifier};
use crate::shared::error::AppError;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 20;

pub struct ListNotificationsUseCase {
    notifier: Arc<dyn Notifier>,
}

impl ListNotificationsUseCase {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, limit: Option<usize>) -> Result<Vec<Notification>, AppError> {
        Ok(self.notifier.recent(limit.unwrap_or(DEFAULT_LIMIT)).await?)
    }
}
