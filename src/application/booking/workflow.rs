//! The three-step booking dialog: Details, then Payment, then Success.
//!
//! Each workflow owns its drafts exclusively. Payment submission goes
//! through a processing delay and always succeeds once the card form
//! validates. The completion callback is handed out as an
//! [`Acknowledgement`] on entering Success and fires only after a second
//! delay, so "Success" and "acknowledged" are distinct instants.

use super::forms::{BookingDetails, PaymentDetails};
use crate::domain::booking::{Quote, session_total};
use crate::domain::qualifications::Qualification;
use crate::domain::scheduler::{DelaySettings, Scheduler};
use crate::shared::error::AppError;
use crate::shared::validation::FieldErrors;
use futures::future::BoxFuture;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Invoked once, after the acknowledgement delay, with no payload
pub type CompletionCallback = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Details,
    Payment,
    Success,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStep::Details => "details",
            BookingStep::Payment => "payment",
            BookingStep::Success => "success",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    UpdateDetails,
    SubmitDetails,
    Back,
    UpdatePayment,
    SubmitPayment,
    FinishPayment,
}

impl fmt::Display for BookingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingAction::UpdateDetails => "update details",
            BookingAction::SubmitDetails => "submit details",
            BookingAction::Back => "go back",
            BookingAction::UpdatePayment => "update payment",
            BookingAction::SubmitPayment => "submit payment",
            BookingAction::FinishPayment => "finish payment",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Cannot {action} in the {step} step")]
    InvalidTransition {
        step: BookingStep,
        action: BookingAction,
    },
    #[error("Payment is being processed")]
    Processing,
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("Booking total is out of range")]
    OutOfRange,
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::Validation(fields) => AppError::FieldErrors(fields),
            other @ WorkflowError::OutOfRange => AppError::ValidationError(other.to_string()),
            other => AppError::Conflict(other.to_string()),
        }
    }
}

/// Pending completion signal; fire it to wait out the acknowledgement
/// delay and run the callback.
pub struct Acknowledgement {
    scheduler: Arc<dyn Scheduler>,
    after: Duration,
    callback: Option<CompletionCallback>,
}

impl Acknowledgement {
    pub fn delay(&self) -> Duration {
        self.after
    }

    pub async fn fire(self) {
        self.scheduler.sleep(self.after).await;
        if let Some(callback) = self.callback {
            callback().await;
        }
    }
}

impl fmt::Debug for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acknowledgement")
            .field("after", &self.after)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// What the Success step shows
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub qualification: String,
    #[schema(example = "$450.00")]
    pub total: String,
    pub date: String,
    pub time: String,
    #[schema(example = "60 minutes")]
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
}

/// Point-in-time copy of a workflow, safe to hand out of the session lock
#[derive(Debug, Clone)]
pub struct BookingSnapshot {
    pub id: Uuid,
    pub qualification: Qualification,
    pub step: BookingStep,
    pub processing: bool,
    pub details: BookingDetails,
    pub masked_card: String,
    pub errors: FieldErrors,
    pub quote: Quote,
    pub summary: Option<BookingSummary>,
}

pub struct BookingWorkflow {
    id: Uuid,
    qualification: Qualification,
    step: BookingStep,
    processing: bool,
    details: BookingDetails,
    payment: PaymentDetails,
    errors: FieldErrors,
    quote: Quote,
    scheduler: Arc<dyn Scheduler>,
    delays: DelaySettings,
    on_complete: Option<CompletionCallback>,
}

fn price(qualification: &Qualification, details: &BookingDetails) -> Result<Quote, WorkflowError> {
    session_total(qualification.rate(), details.duration, details.headcount())
        .and_then(|total| Quote::new(qualification.currency(), total))
        .ok_or(WorkflowError::OutOfRange)
}

impl fmt::Debug for BookingWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingWorkflow")
            .field("id", &self.id)
            .field("qualification", &self.qualification.id())
            .field("step", &self.step)
            .field("processing", &self.processing)
            .finish_non_exhaustive()
    }
}

impl BookingWorkflow {
    pub fn new(
        qualification: Qualification,
        scheduler: Arc<dyn Scheduler>,
        delays: DelaySettings,
    ) -> Result<Self, WorkflowError> {
        let details = BookingDetails::for_qualification(&qualification);
        let quote = price(&qualification, &details)?;
        Ok(Self {
            id: Uuid::new_v4(),
            details,
            qualification,
            step: BookingStep::Details,
            processing: false,
            payment: PaymentDetails::default(),
            errors: FieldErrors::default(),
            quote,
            scheduler,
            delays,
            on_complete: None,
        })
    }

    pub fn on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn qualification(&self) -> &Qualification {
        &self.qualification
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn details(&self) -> &BookingDetails {
        &self.details
    }

    pub fn payment(&self) -> &PaymentDetails {
        &self.payment
    }

    /// Messages from the last rejected submit
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Priced from the current details draft
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn summary(&self) -> Option<BookingSummary> {
        if self.step != BookingStep::Success {
            return None;
        }

        let quote = &self.quote;
        Some(BookingSummary {
            qualification: self.qualification.name().to_string(),
            total: quote.display(quote.total),
            date: self.details.date.clone(),
            time: self.details.time.clone(),
            duration: self.details.duration.to_string(),
            student_count: match self.qualification {
                Qualification::Group(_) => Some(self.details.headcount()),
                Qualification::Private(_) => None,
            },
        })
    }

    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            id: self.id,
            qualification: self.qualification.clone(),
            step: self.step,
            processing: self.processing,
            details: self.details.clone(),
            masked_card: self.payment.masked_card(),
            errors: self.errors.clone(),
            quote: self.quote.clone(),
            summary: self.summary(),
        }
    }

    fn expect_step(&self, step: BookingStep, action: BookingAction) -> Result<(), WorkflowError> {
        if self.step != step {
            return Err(WorkflowError::InvalidTransition {
                step: self.step,
                action,
            });
        }
        Ok(())
    }

    fn expect_idle(&self) -> Result<(), WorkflowError> {
        if self.processing {
            return Err(WorkflowError::Processing);
        }
        Ok(())
    }

    /// Replaces the details draft and reprices it. A draft whose total
    /// cannot be represented is refused and the previous one kept.
    pub fn update_details(&mut self, details: BookingDetails) -> Result<(), WorkflowError> {
        self.expect_step(BookingStep::Details, BookingAction::UpdateDetails)?;

        let details = details.resolve(&self.qualification, &self.details);
        self.quote = price(&self.qualification, &details)?;
        self.details = details;
        Ok(())
    }

    pub fn submit_details(&mut self) -> Result<(), WorkflowError> {
        self.expect_step(BookingStep::Details, BookingAction::SubmitDetails)?;

        if let Err(errors) = self.details.check(&self.qualification) {
            self.errors = errors.clone();
            return Err(WorkflowError::Validation(errors));
        }

        self.errors = FieldErrors::default();
        self.step = BookingStep::Payment;
        tracing::debug!(booking = %self.id, "booking details accepted");
        Ok(())
    }

    /// Payment back to Details; both drafts are kept
    pub fn back(&mut self) -> Result<(), WorkflowError> {
        self.expect_step(BookingStep::Payment, BookingAction::Back)?;
        self.expect_idle()?;

        self.errors = FieldErrors::default();
        self.step = BookingStep::Details;
        tracing::debug!(booking = %self.id, "booking returned to details");
        Ok(())
    }

    pub fn update_payment(&mut self, payment: PaymentDetails) -> Result<(), WorkflowError> {
        self.expect_step(BookingStep::Payment, BookingAction::UpdatePayment)?;
        self.expect_idle()?;
        self.payment = payment.normalized();
        Ok(())
    }

    /// Validates the card form and enters processing; returns how long
    /// processing takes.
    pub fn begin_payment(&mut self) -> Result<Duration, WorkflowError> {
        self.expect_step(BookingStep::Payment, BookingAction::SubmitPayment)?;
        self.expect_idle()?;

        if let Err(errors) = self.payment.check() {
            self.errors = errors.clone();
            return Err(WorkflowError::Validation(errors));
        }

        self.errors = FieldErrors::default();
        self.processing = true;
        tracing::debug!(booking = %self.id, "processing payment");
        Ok(self.delays.payment_processing)
    }

    pub fn finish_payment(&mut self) -> Result<Acknowledgement, WorkflowError> {
        self.expect_step(BookingStep::Payment, BookingAction::FinishPayment)?;
        if !self.processing {
            return Err(WorkflowError::InvalidTransition {
                step: self.step,
                action: BookingAction::FinishPayment,
            });
        }

        self.processing = false;
        self.step = BookingStep::Success;

        let quote = &self.quote;
        tracing::info!(
            booking = %self.id,
            qualification = %self.qualification.id(),
            total = %quote.display(quote.total),
            "booking paid"
        );

        Ok(Acknowledgement {
            scheduler: self.scheduler.clone(),
            after: self.delays.booking_acknowledgement,
            callback: self.on_complete.take(),
        })
    }

    /// Discards the drafts; refused once payment processing has begun
    pub fn close(self) -> Result<(), (Self, WorkflowError)> {
        if self.processing {
            return Err((self, WorkflowError::Processing));
        }
        tracing::debug!(booking = %self.id, step = %self.step, "booking closed");
        Ok(())
    }
}
