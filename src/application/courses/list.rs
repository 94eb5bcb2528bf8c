use crate::domain::courses::{Course, CourseRepository, CourseStatus};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatusFilter {
    #[default]
    All,
    Active,
    Draft,
    Completed,
}

impl CourseStatusFilter {
    fn admits(&self, status: CourseStatus) -> bool {
        match self {
            CourseStatusFilter::All => true,
            CourseStatusFilter::Active => status == CourseStatus::Active,
            CourseStatusFilter::Draft => status == CourseStatus::Draft,
            CourseStatusFilter::Completed => status == CourseStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CourseFilter {
    pub search: Option<String>,
    #[serde(default)]
    pub status: CourseStatusFilter,
}

pub struct ListCoursesUseCase {
    repo: Arc<dyn CourseRepository>,
}

impl ListCoursesUseCase {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, filter: CourseFilter) -> Result<Vec<Course>, AppError> {
        let search = filter.search.as_deref().map(str::trim).unwrap_or("");
        Ok(self
            .repo
            .find_all()
            .await?
            .into_iter()
            .filter(|c| search.is_empty() || c.matches_search(search))
            .filter(|c| filter.status.admits(c.status))
            .collect())
    }
}
