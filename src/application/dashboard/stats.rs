use crate::domain::dashboard::{DashboardRepository, DashboardStats};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetDashboardStatsUseCase {
    repo: Arc<dyn DashboardRepository>,
}

impl GetDashboardStatsUseCase {
    pub fn new(repo: Arc<dyn DashboardRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<DashboardStats, AppError> {
        Ok(self.repo.stats().await?)
    }
}
