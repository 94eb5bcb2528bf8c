use super::teacher::MemberStatus;
use async_trait::async_trait;
use time::Date;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub status: MemberStatus,
    pub enrolled_courses: u32,
    pub join_date: Date,
}

impl Student {
    /// Case-insensitive substring match on name or email
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, anyhow::Error>;
}
