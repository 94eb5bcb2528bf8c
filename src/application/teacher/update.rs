use crate::domain::notifications::{NotificationLevel, Notifier};
use crate::domain::scheduler::Scheduler;
use crate::domain::teacher::{Address, Teacher, TeacherRepository, UpdateTeacher};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const UPDATED_MESSAGE: &str = "Teacher information updated successfully!";

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name").with_message(Cow::Borrowed("Name is required")));
    }
    Ok(())
}

/// Contact block of the profile editor
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherRequest {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Alynia Allan")]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    #[schema(example = "alynia.allan@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "(555) 555-1234")]
    pub phone: String,
    pub address: Address,
}

pub struct UpdateTeacherUseCase {
    repo: Arc<dyn TeacherRepository>,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl UpdateTeacherUseCase {
    pub fn new(
        repo: Arc<dyn TeacherRepository>,
        notifier: Arc<dyn Notifier>,
        scheduler: Arc<dyn Scheduler>,
        delay: Duration,
    ) -> Self {
        Self {
            repo,
            notifier,
            scheduler,
            delay,
        }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, req: UpdateTeacherRequest) -> Result<Teacher, AppError> {
        self.scheduler.sleep(self.delay).await;

        let teacher = self
            .repo
            .update(UpdateTeacher {
                name: req.name.trim().to_string(),
                email: req.email,
                phone: req.phone,
                address: req.address,
            })
            .await?;

        tracing::info!(teacher = %teacher.id, "teacher profile updated");
        self.notifier
            .notify(NotificationLevel::Success, UPDATED_MESSAGE.to_string())
            .await?;

        Ok(teacher)
    }
}
