use super::workflow::{BookingSnapshot, BookingWorkflow};
use crate::shared::error::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

/// How many dialogs may stay open and for how long without activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle_timeout: Duration,
    pub max_open: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_open: 1000,
        }
    }
}

struct OpenBooking {
    workflow: BookingWorkflow,
    touched_at: OffsetDateTime,
}

/// Open booking dialogs keyed by booking id. Closing a dialog drops its
/// workflow and every draft it held.
///
/// Dialogs untouched for `idle_timeout` are evicted when the next one
/// opens, unless payment is processing.
#[derive(Clone, Default)]
pub struct BookingSessions {
    open: Arc<Mutex<HashMap<Uuid, OpenBooking>>>,
    limits: SessionLimits,
}

impl BookingSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            open: Arc::default(),
            limits,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, OpenBooking>>, AppError> {
        self.open
            .lock()
            .map_err(|_| AppError::InternalServerError(anyhow::anyhow!("booking sessions lock poisoned")))
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Booking with id {} not found", id))
    }

    pub fn insert(&self, workflow: BookingWorkflow) -> Result<BookingSnapshot, AppError> {
        self.insert_at(workflow, OffsetDateTime::now_utc())
    }

    fn insert_at(
        &self,
        workflow: BookingWorkflow,
        now: OffsetDateTime,
    ) -> Result<BookingSnapshot, AppError> {
        let mut open = self.lock()?;
        self.evict_idle(&mut open, now);
        if open.len() >= self.limits.max_open {
            tracing::warn!(open = open.len(), "booking session limit reached");
            return Err(AppError::Conflict(
                "Too many bookings are open, try again later".to_string(),
            ));
        }

        let snapshot = workflow.snapshot();
        open.insert(
            workflow.id(),
            OpenBooking {
                workflow,
                touched_at: now,
            },
        );
        Ok(snapshot)
    }

    fn evict_idle(&self, open: &mut HashMap<Uuid, OpenBooking>, now: OffsetDateTime) {
        let before = open.len();
        open.retain(|_, entry| {
            entry.workflow.is_processing() || entry.touched_at + self.limits.idle_timeout > now
        });
        let evicted = before - open.len();
        if evicted > 0 {
            tracing::info!(evicted, "idle bookings evicted");
        }
    }

    /// Runs `f` against the open workflow under the store lock
    pub fn with<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut BookingWorkflow) -> R,
    ) -> Result<R, AppError> {
        let mut open = self.lock()?;
        let entry = open.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        entry.touched_at = OffsetDateTime::now_utc();
        Ok(f(&mut entry.workflow))
    }

    pub fn close(&self, id: Uuid) -> Result<(), AppError> {
        let mut open = self.lock()?;
        let entry = open.remove(&id).ok_or_else(|| Self::not_found(id))?;

        if let Err((workflow, err)) = entry.workflow.close() {
            open.insert(
                id,
                OpenBooking {
                    workflow,
                    touched_at: entry.touched_at,
                },
            );
            return Err(err.into());
        }
        Ok(())
    }

    /// Drops the session without the processing guard; used by the
    /// completion callback once the booking is acknowledged.
    pub fn discard(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.lock().map(|open| open.contains_key(&id)).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.lock().map(|open| open.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
