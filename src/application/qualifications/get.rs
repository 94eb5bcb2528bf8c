use crate::domain::qualifications::{Qualification, QualificationKind, QualificationRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub(crate) fn not_found(kind: QualificationKind, id: &str) -> AppError {
    AppError::NotFound(format!("{} qualification with id {} not found", kind.label(), id))
}

pub struct GetQualificationUseCase {
    repo: Arc<dyn QualificationRepository>,
}

impl GetQualificationUseCase {
    pub fn new(repo: Arc<dyn QualificationRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, kind: QualificationKind, id: &str) -> Result<Qualification, AppError> {
        self.repo
            .find(kind, id)
            .await?
            .ok_or_else(|| not_found(kind, id))
    }
}
