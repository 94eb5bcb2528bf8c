use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub avatar: Option<String>,
    pub status: MemberStatus,
    pub join_date: Date,
    pub specializations: Vec<String>,
    pub experience_years: u32,
    pub rating: f32,
    pub total_students: u32,
}

impl Teacher {
    /// Two-letter monogram shown when no avatar is set
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Contact details editable from the profile header
#[derive(Debug, Clone)]
pub struct UpdateTeacher {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn get(&self) -> Result<Teacher, anyhow::Error>;
    async fn update(&self, update: UpdateTeacher) -> Result<Teacher, anyhow::Error>;
}
