use super::{EventLifecycle, settle};
use crate::alarm::AlarmPort;
use crate::clock::Clock;
use crate::event::{EventId, ReminderRequest};
use crate::outcome::OperationResult;
use crate::storage::EventStore;
use crate::validator;

impl<S: EventStore, A: AlarmPort, C: Clock> EventLifecycle<S, A, C> {
    /// Ask again for an event's reminder, typically after create reported
    /// `PermissionRequired` and consent has since been given.
    pub fn schedule_reminder(&self, id: EventId) -> OperationResult {
        settle(self.try_schedule_reminder(id))
    }

    fn try_schedule_reminder(&self, id: EventId) -> Result<OperationResult, OperationResult> {
        let Some(event) = self.store.get(id)? else {
            return Err(OperationResult::NotFound);
        };

        validator::validate_not_past(event.start, self.clock.now())?;

        Ok(self.schedule_outcome(&ReminderRequest::for_event(&event), true))
    }
}
