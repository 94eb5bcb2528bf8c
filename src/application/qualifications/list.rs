use crate::domain::qualifications::{Qualification, QualificationKind, QualificationRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListQualificationsUseCase {
    repo: Arc<dyn QualificationRepository>,
}

impl ListQualificationsUseCase {
    pub fn new(repo: Arc<dyn QualificationRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, kind: QualificationKind) -> Result<Vec<Qualification>, AppError> {
        Ok(self.repo.list(kind).await?)
    }
}
