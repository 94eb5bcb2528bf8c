use super::form::QualificationRequest;
use super::get::not_found;
use crate::domain::notifications::{NotificationLevel, Notifier};
use crate::domain::qualifications::{Qualification, QualificationKind, QualificationRepository};
use crate::domain::scheduler::Scheduler;
use crate::shared::error::AppError;
use std::sync::Arc;
use std::time::Duration;

pub struct UpdateQualificationUseCase {
    repo: Arc<dyn QualificationRepository>,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl UpdateQualificationUseCase {
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
        id: &str,
        req: QualificationRequest,
    ) -> Result<Qualification, AppError> {
        if self.repo.find(kind, id).await?.is_none() {
            return Err(not_found(kind, id));
        }
        req.check(kind).map_err(AppError::FieldErrors)?;

        self.scheduler.sleep(self.delay).await;

        let updated = req.into_draft().into_qualification(kind, id.to_string());
        let replacement = updated.clone();
        let target = id.to_string();
        let replaced = self
            .repo
            .modify(
                kind,
                Box::new(move |list| {
                    match list.iter_mut().find(|q| q.id() == target) {
                        Some(slot) => {
                            *slot = replacement;
                            true
                        }
                        None => false,
                    }
                }),
            )
            .await?;
        // Deleted while the edit was in flight
        if !replaced {
            return Err(not_found(kind, id));
        }

        tracing::info!(%kind, id, "qualification updated");
        self.notifier
            .notify(
                NotificationLevel::Success,
                format!("{} qualification updated successfully!", kind.label()),
            )
            .await?;

        Ok(updated)
    }
}
