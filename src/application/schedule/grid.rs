use super::layout::{GridDefinition, ScheduleGrid, ScheduleLayoutEngine};
use crate::domain::schedule::ScheduleRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetScheduleGridUseCase {
    repo: Arc<dyn ScheduleRepository>,
    engine: ScheduleLayoutEngine,
}

impl GetScheduleGridUseCase {
    pub fn new(repo: Arc<dyn ScheduleRepository>, grid: GridDefinition) -> Self {
        Self {
            repo,
            engine: ScheduleLayoutEngine::new(grid),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<ScheduleGrid, AppError> {
        let slots = self.repo.list().await?;
        Ok(self.engine.layout(&slots))
    }
}
