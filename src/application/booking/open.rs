use super::sessions::BookingSessions;
use super::workflow::{BookingSnapshot, BookingWorkflow};
use crate::domain::notifications::{NotificationLevel, Notifier};
use crate::domain::qualifications::{QualificationKind, QualificationRepository};
use crate::domain::scheduler::{DelaySettings, Scheduler};
use crate::shared::error::AppError;
use futures::FutureExt;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

pub const BOOKED_MESSAGE: &str = "Session booked successfully!";

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenBookingRequest {
    #[schema(example = "group")]
    pub kind: QualificationKind,
    #[validate(length(min = 1, message = "Qualification is required"))]
    #[schema(example = "2")]
    pub qualification_id: String,
}

pub struct OpenBookingUseCase {
    qualifications: Arc<dyn QualificationRepository>,
    sessions: BookingSessions,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<dyn Scheduler>,
    delays: DelaySettings,
}

impl OpenBookingUseCase {
    pub fn new(
        qualifications: Arc<dyn QualificationRepository>,
        sessions: BookingSessions,
        notifier: Arc<dyn Notifier>,
        scheduler: Arc<dyn Scheduler>,
        delays: DelaySettings,
    ) -> Self {
        Self {
            qualifications,
            sessions,
            notifier,
            scheduler,
            delays,
        }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, req: OpenBookingRequest) -> Result<BookingSnapshot, AppError> {
        let qualification = self
            .qualifications
            .find(req.kind, &req.qualification_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} qualification with id {} not found",
                    req.kind.label(),
                    req.qualification_id
                ))
            })?;

        let workflow = BookingWorkflow::new(qualification, self.scheduler.clone(), self.delays)?;
        let id = workflow.id();

        // Acknowledged bookings close their dialog and tell the operator
        let sessions = self.sessions.clone();
        let notifier = self.notifier.clone();
        let workflow = workflow.on_complete(Box::new(move || {
            async move {
                if let Err(e) = sessions.discard(id) {
                    tracing::error!(booking = %id, error = %e, "failed to close booking");
                }
                if let Err(e) = notifier
                    .notify(NotificationLevel::Success, BOOKED_MESSAGE.to_string())
                    .await
                {
                    tracing::error!(booking = %id, error = %e, "failed to record notification");
                }
            }
            .boxed()
        }));

        tracing::info!(booking = %id, "booking opened");
        self.sessions.insert(workflow)
    }
}
