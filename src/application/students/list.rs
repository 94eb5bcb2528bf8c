use crate::domain::students::{Student, StudentRepository};
use crate::domain::teacher::MemberStatus;
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl StudentStatusFilter {
    fn admits(&self, status: MemberStatus) -> bool {
        match self {
            StudentStatusFilter::All => true,
            StudentStatusFilter::Active => status == MemberStatus::Active,
            StudentStatusFilter::Inactive => status == MemberStatus::Inactive,
            StudentStatusFilter::Pending => status == MemberStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StudentFilter {
    pub search: Option<String>,
    #[serde(default)]
    pub status: StudentStatusFilter,
}

pub struct ListStudentsUseCase {
    repo: Arc<dyn StudentRepository>,
}

impl ListStudentsUseCase {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, filter: StudentFilter) -> Result<Vec<Student>, AppError> {
        let search = filter.search.as_deref().map(str::trim).unwrap_or("");
        Ok(self
            .repo
            .find_all()
            .await?
            .into_iter()
            .filter(|s| search.is_empty() || s.matches_search(search))
            .filter(|s| filter.status.admits(s.status))
            .collect())
    }
}
