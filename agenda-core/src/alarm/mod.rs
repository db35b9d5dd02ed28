//! Reminder scheduling.
//!
//! [`AlarmPort`] is the contract the lifecycle schedules through: at most one
//! pending one-shot alarm per event id. [`AlarmBook`] keeps pending alarms on
//! disk and [`Dispatcher`] delivers them when they come due.

mod book;
mod dispatch;
mod memory;

pub use book::AlarmBook;
pub use dispatch::{Dispatcher, Notifier};
pub use memory::{AlarmCall, MemoryAlarms};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AgendaResult;
use crate::event::EventId;

/// A scheduled wake-up for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAlarm {
    pub event_id: EventId,
    pub label: String,
    pub trigger_at: DateTime<Utc>,
}

pub trait AlarmPort {
    /// Schedule (or replace) the alarm for `id`.
    ///
    /// Returns `Ok(false)` when the host does not permit exact scheduling;
    /// nothing is scheduled in that case.
    fn schedule(&self, id: EventId, label: &str, trigger_at: DateTime<Utc>) -> AgendaResult<bool>;

    /// Cancel the alarm for `id`. Succeeds when nothing is scheduled.
    fn cancel(&self, id: EventId) -> AgendaResult<()>;

    fn can_schedule_exact(&self) -> bool;

    fn reschedule(
        &self,
        id: EventId,
        label: &str,
        trigger_at: DateTime<Utc>,
    ) -> AgendaResult<bool> {
        self.cancel(id)?;
        self.schedule(id, label, trigger_at)
    }
}
