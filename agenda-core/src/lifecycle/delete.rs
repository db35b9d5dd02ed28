use tracing::{info, warn};

use super::{EventLifecycle, settle};
use crate::alarm::AlarmPort;
use crate::clock::Clock;
use crate::error::AgendaResult;
use crate::event::EventId;
use crate::outcome::OperationResult;
use crate::storage::EventStore;

impl<S: EventStore, A: AlarmPort, C: Clock> EventLifecycle<S, A, C> {
    /// Cancel the event's reminder, then remove the record.
    ///
    /// The cancel is issued for any id, present or not. If it fails the
    /// record is kept.
    pub fn delete(&self, id: EventId) -> OperationResult {
        settle(self.try_delete(id))
    }

    fn try_delete(&self, id: EventId) -> Result<OperationResult, OperationResult> {
        self.alarms.cancel(id).map_err(|e| {
            warn!(event_id = id, error = %e, "could not cancel reminder, event kept");
            OperationResult::storage_failure(format!(
                "Could not cancel the reminder for event {}: {}",
                id, e
            ))
        })?;

        if self.store.delete(id)? == 0 {
            return Err(OperationResult::NotFound);
        }

        info!(event_id = id, "event deleted");
        Ok(OperationResult::Success { id })
    }

    /// Remove every event and its reminder. Returns how many were removed.
    pub fn clear_all(&self) -> AgendaResult<usize> {
        for event in self.store.list()? {
            self.alarms.cancel(event.id)?;
        }

        let removed = self.store.delete_all()?;
        info!(removed, "all events cleared");

        Ok(removed)
    }
}
