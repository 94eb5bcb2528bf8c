use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    Draft,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub students: u32,
    pub duration: String,
    pub status: CourseStatus,
    pub price: Decimal,
}

impl Course {
    /// Case-insensitive substring match on title or instructor
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.instructor.to_lowercase().contains(&term)
    }
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Course>, anyhow::Error>;
}
