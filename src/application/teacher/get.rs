use crate::domain::teacher::{Teacher, TeacherRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetTeacherUseCase {
    repo: Arc<dyn TeacherRepository>,
}

impl GetTeacherUseCase {
    pub fn new(repo: Arc<dyn TeacherRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Teacher, AppError> {
        Ok(self.repo.get().await?)
    }
}
