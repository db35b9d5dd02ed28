//! Event lifecycle orchestration.
//!
//! [`EventLifecycle`] composes the validator, an [`EventStore`] and an
//! [`AlarmPort`] into create, update, delete and query operations. It decides
//! the ordering between "record persisted" and "reminder scheduled":
//!
//! - create persists first and schedules second; a refused schedule leaves
//!   the record in place and reports `PermissionRequired`
//! - update reschedules only while the new alarm time is still ahead
//! - delete cancels the alarm before removing the record
//!
//! Mutating operations return an [`OperationResult`] and never an `Err`.

mod create;
mod delete;
mod remind;
mod update;

#[cfg(test)]
mod test_support;

use crate::alarm::AlarmPort;
use crate::clock::{Clock, SystemClock};
use crate::error::AgendaResult;
use crate::event::{Event, EventId, ReminderRequest};
use crate::outcome::OperationResult;
use crate::storage::EventStore;
use tracing::warn;

/// Shown when a reminder could not be scheduled for lack of consent.
pub const PERMISSION_MESSAGE: &str = "Exact alarm permission is required to set a reminder";

/// The orchestrator. Collaborators are injected once at construction.
pub struct EventLifecycle<S, A, C = SystemClock> {
    store: S,
    alarms: A,
    clock: C,
}

impl<S: EventStore, A: AlarmPort, C: Clock> EventLifecycle<S, A, C> {
    pub fn new(store: S, alarms: A, clock: C) -> Self {
        EventLifecycle {
            store,
            alarms,
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn alarms(&self) -> &A {
        &self.alarms
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // QUERIES:

    /// `Ok(None)` when no event has this id.
    pub fn get(&self, id: EventId) -> AgendaResult<Option<Event>> {
        self.store.get(id)
    }

    /// All events, soonest start first.
    pub fn list(&self) -> AgendaResult<Vec<Event>> {
        self.store.list()
    }

    /// Whether reminders can currently be scheduled at exact times.
    pub fn reminders_permitted(&self) -> bool {
        self.alarms.can_schedule_exact()
    }

    /// Ask the alarm port for a persisted event's reminder and report the
    /// outcome the way create does.
    fn schedule_outcome(&self, reminder: &ReminderRequest, replace: bool) -> OperationResult {
        let id = reminder.event_id;
        let scheduled = if replace {
            self.alarms
                .reschedule(id, &reminder.label, reminder.alarm_time)
        } else {
            self.alarms.schedule(id, &reminder.label, reminder.alarm_time)
        };

        match scheduled {
            Ok(true) => OperationResult::Success { id },
            Ok(false) => {
                warn!(event_id = id, "exact alarm permission denied, reminder not set");
                OperationResult::PermissionRequired {
                    id,
                    message: PERMISSION_MESSAGE.to_string(),
                }
            }
            Err(e) => OperationResult::storage_failure(format!(
                "Event {} was saved but its reminder could not be scheduled: {}",
                id, e
            )),
        }
    }
}

/// Run a fallible pipeline whose early exits are themselves outcomes.
fn settle(pipeline: Result<OperationResult, OperationResult>) -> OperationResult {
    match pipeline {
        Ok(outcome) | Err(outcome) => outcome,
    }
}
