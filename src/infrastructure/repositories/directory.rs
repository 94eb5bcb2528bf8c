//! Static listings behind the students, courses and dashboard screens.

use crate::domain::courses::{Course, CourseRepository};
use crate::domain::dashboard::{DashboardRepository, DashboardStats};
use crate::domain::students::{Student, StudentRepository};
use crate::infrastructure::seed;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct InMemoryDirectory {
    students: Arc<Vec<Student>>,
    courses: Arc<Vec<Course>>,
    stats: DashboardStats,
}

impl InMemoryDirectory {
    pub fn new(students: Vec<Student>, courses: Vec<Course>, stats: DashboardStats) -> Self {
        Self {
            students: Arc::new(students),
            courses: Arc::new(courses),
            stats,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::students(), seed::courses(), seed::dashboard_stats())
    }
}

#[async_trait]
impl StudentRepository for InMemoryDirectory {
    async fn find_all(&self) -> Result<Vec<Student>, anyhow::Error> {
        Ok(self.students.as_ref().clone())
    }
}

#[async_trait]
impl CourseRepository for InMemoryDirectory {
    async fn find_all(&self) -> Result<Vec<Course>, anyhow::Error> {
        Ok(self.courses.as_ref().clone())
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDirectory {
    async fn stats(&self) -> Result<DashboardStats, anyhow::Error> {
        Ok(self.stats.clone())
    }
}
