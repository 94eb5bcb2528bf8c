use super::form::QualificationRequest;
use crate::domain::notifications::{NotificationLevel, Notifier};
use crate::domain::qualifications::{Qualification, QualificationKind, QualificationRepository};
use crate::domain::scheduler::Scheduler;
use crate::shared::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct CreateQualificationUseCase {
    repo: Arc<dyn QualificationRepository>,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl CreateQualificationUseCase {
    pub fn new(
        repo: Arc<dyn QualificationRepository>,
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
    pub async fn execute(
        &self,
        kind: QualificationKind,
        req: QualificationRequest,
    ) -> Result<Qualification, AppError> {
        req.check(kind).map_err(AppError::FieldErrors)?;

        self.scheduler.sleep(self.delay).await;

        let qualification = req
            .into_draft()
            .into_qualification(kind, Uuid::new_v4().to_string());

        let added = qualification.clone();
        self.repo
            .modify(
                kind,
                Box::new(move |list| {
                    list.push(added);
                    true
                }),
            )
            .await?;

        tracing::info!(%kind, id = %qualification.id(), "qualification added");
        self.notifier
            .notify(
                NotificationLevel::Success,
                format!("{} qualification added successfully!", kind.label()),
            )
            .await?;

        Ok(qualification)
    }
}
