use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
}

/// A message surfaced to the operator after a mutation settles
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: OffsetDateTime,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, level: NotificationLevel, message: String) -> Result<(), anyhow::Error>;
    async fn recent(&self, limit: usize) -> Result<Vec<Notification>, anyhow::Error>;
}
