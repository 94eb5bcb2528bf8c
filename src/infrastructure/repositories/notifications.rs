use crate::domain::notifications::{Notification, NotificationLevel, Notifier};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use uuid::Uuid;

const CAPACITY: usize = 100;

/// Bounded log of operator notifications, newest first
#[derive(Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Notifier for NotificationLog {
    async fn notify(&self, level: NotificationLevel, message: String) -> Result<(), anyhow::Error> {
        tracing::info!(?level, %message, "operator notification");

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("notification log lock poisoned"))?;
        entries.push_front(Notification {
            id: Uuid::new_v4(),
            level,
            message,
            created_at: OffsetDateTime::now_utc(),
        });
        entries.truncate(CAPACITY);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Notification>, anyhow::Error> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("notification log lock poisoned"))?;
        Ok(entries.iter().take(limit).cloned().collect())
    }
}
