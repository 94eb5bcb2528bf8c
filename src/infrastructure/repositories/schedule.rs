use crate::domain::schedule::{ScheduleRepository, ScheduleSlot};
use crate::infrastructure::seed;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only weekly timetable
#[derive(Clone, Default)]
pub struct InMemoryScheduleRepository {
    slots: Arc<Vec<ScheduleSlot>>,
}

impl InMemoryScheduleRepository {
    pub fn new(slots: Vec<ScheduleSlot>) -> Self {
        Self {
            slots: Arc::new(slots),
        }
    }

    pub fn seeded() -> anyhow::Result<Self> {
        Ok(Self::new(seed::schedule()?))
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn list(&self) -> Result<Vec<ScheduleSlot>, anyhow::Error> {
        Ok(self.slots.as_ref().clone())
    }
}
