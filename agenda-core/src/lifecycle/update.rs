use tracing::{debug, info, warn};

use super::{EventLifecycle, settle};
use crate::alarm::AlarmPort;
use crate::clock::Clock;
use crate::event::{EventChanges, EventId, ReminderRequest};
use crate::outcome::OperationResult;
use crate::storage::EventStore;
use crate::validator;

impl<S: EventStore, A: AlarmPort, C: Clock> EventLifecycle<S, A, C> {
    /// Replace every mutable field of an existing event.
    ///
    /// Unlike create, a start in the past is accepted. The reminder is
    /// rescheduled only while its alarm time is still ahead; otherwise any
    /// earlier alarm for the event is left alone. Reminder problems never
    /// change the outcome once the record is saved.
    pub fn update(&self, id: EventId, changes: &EventChanges) -> OperationResult {
        settle(self.try_update(id, changes))
    }

    fn try_update(
        &self,
        id: EventId,
        changes: &EventChanges,
    ) -> Result<OperationResult, OperationResult> {
        validator::validate_title(&changes.title)?;
        validator::validate_instant_ordering(changes.start, changes.end)?;

        let Some(mut event) = self.store.get(id)? else {
            return Err(OperationResult::NotFound);
        };

        event.apply(changes);

        if self.store.update(&event)? == 0 {
            return Err(OperationResult::storage_failure(format!(
                "Could not update event {}",
                id
            )));
        }

        info!(event_id = id, title = %event.title, "event updated");

        self.refresh_reminder(&ReminderRequest::for_event(&event));

        Ok(OperationResult::Success { id })
    }

    fn refresh_reminder(&self, reminder: &ReminderRequest) {
        let id = reminder.event_id;

        if reminder.alarm_time <= self.clock.now() {
            debug!(event_id = id, alarm_time = %reminder.alarm_time, "alarm time passed, reminder left as is");
            return;
        }

        match self
            .alarms
            .reschedule(id, &reminder.label, reminder.alarm_time)
        {
            Ok(true) => debug!(event_id = id, alarm_time = %reminder.alarm_time, "reminder rescheduled"),
            Ok(false) => warn!(event_id = id, "exact alarm permission denied, reminder not rescheduled"),
            Err(e) => warn!(event_id = id, error = %e, "could not reschedule reminder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::AlarmCall;
    use crate::event::Event;
    use crate::lifecycle::test_support::*;
    use chrono::Duration;

    fn changes_from(event: &Event) -> EventChanges {
        EventChanges {
            title: event.title.clone(),
            note: event.note.clone(),
            start: event.start,
            end: event.end,
            remind_before: event.remind_before,
        }
    }

    #[test]
    fn update_replaces_all_fields_and_reschedules() {
        let agenda = lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        let before = agenda.alarms().calls().len();

        let changes = EventChanges {
            title: "Planning".to_string(),
            note: None,
            start: tomorrow_at(14, 0),
            end: tomorrow_at(15, 0),
            remind_before: 30,
        };

        assert_eq!(agenda.update(id, &changes), OperationResult::Success { id });

        let stored = agenda.get(id).unwrap().unwrap();
        assert_eq!(stored.title, "Planning");
        assert_eq!(stored.note, None);
        assert_eq!(stored.start, tomorrow_at(14, 0));
        assert_eq!(stored.end, tomorrow_at(15, 0));
        assert_eq!(stored.remind_before, 30);

        assert_eq!(
            &agenda.alarms().calls()[before..],
            &[
                AlarmCall::Cancel { event_id: id },
                AlarmCall::Schedule {
                    event_id: id,
                    trigger_at: tomorrow_at(13, 30),
                },
            ]
        );
        assert_eq!(
            agenda.alarms().pending(id).unwrap().label,
            "Planning".to_string()
        );
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let agenda = lifecycle();
        agenda.create(&standup());
        let before = agenda.list().unwrap();

        let changes = EventChanges {
            title: "Ghost".to_string(),
            note: None,
            start: tomorrow_at(10, 0),
            end: tomorrow_at(11, 0),
            remind_before: 0,
        };

        assert_eq!(agenda.update(42, &changes), OperationResult::NotFound);
        assert_eq!(agenda.list().unwrap(), before);
    }

    #[test]
    fn past_alarm_time_skips_scheduling() {
        let agenda = lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        let schedules = agenda.alarms().schedule_calls();
        let cancels = agenda.alarms().cancel_calls();

        // Meeting is under way: alarm (08:50) is behind us
        agenda.clock().set(tomorrow_at(9, 5));

        let mut changes = changes_from(&agenda.get(id).unwrap().unwrap());
        changes.title = "Standup (moved room)".to_string();

        assert_eq!(agenda.update(id, &changes), OperationResult::Success { id });
        assert_eq!(
            agenda.get(id).unwrap().unwrap().title,
            "Standup (moved room)"
        );
        assert_eq!(agenda.alarms().schedule_calls(), schedules);
        assert_eq!(agenda.alarms().cancel_calls(), cancels);
        // Earlier alarm stays with the old label
        assert_eq!(agenda.alarms().pending(id).unwrap().label, "Standup");
    }

    #[test]
    fn update_accepts_past_start() {
        let agenda = lifecycle();
        let id = agenda.create(&standup()).id().unwrap();

        let changes = EventChanges {
            title: "Retro".to_string(),
            note: None,
            start: now() - Duration::days(2),
            end: now() - Duration::days(2) + Duration::hours(1),
            remind_before: 0,
        };

        assert!(agenda.update(id, &changes).is_success());
        assert_eq!(agenda.get(id).unwrap().unwrap().start, now() - Duration::days(2));
    }

    #[test]
    fn update_validates_before_reading() {
        let agenda = lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        let original = agenda.get(id).unwrap().unwrap();

        let mut short = changes_from(&original);
        short.title = "ab".to_string();
        assert!(matches!(
            agenda.update(id, &short),
            OperationResult::ValidationError { .. }
        ));

        let mut inverted = changes_from(&original);
        inverted.end = inverted.start;
        assert_eq!(
            agenda.update(id, &inverted).message(),
            Some("End time must be after start time")
        );

        // Validation runs before the lookup, so a missing id still reports it
        assert!(matches!(
            agenda.update(99, &short),
            OperationResult::ValidationError { .. }
        ));

        assert_eq!(agenda.get(id).unwrap().unwrap(), original);
    }

    #[test]
    fn denied_reschedule_still_succeeds() {
        let agenda = lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        agenda.alarms().set_permitted(false);

        let mut changes = changes_from(&agenda.get(id).unwrap().unwrap());
        changes.start = tomorrow_at(11, 0);
        changes.end = tomorrow_at(12, 0);

        assert_eq!(agenda.update(id, &changes), OperationResult::Success { id });
        assert_eq!(agenda.get(id).unwrap().unwrap().start, tomorrow_at(11, 0));
        assert_eq!(agenda.alarms().pending(id), None);
    }

    #[test]
    fn zero_rows_updated_is_storage_failure() {
        let agenda = faulty_lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        let original = agenda.get(id).unwrap().unwrap();
        let calls = agenda.alarms().inner.calls();
        agenda.store().set_mode(WriteMode::NoRows);

        let mut changes = changes_from(&original);
        changes.title = "Planning".to_string();

        assert_eq!(
            agenda.update(id, &changes),
            OperationResult::StorageFailure {
                message: format!("Could not update event {}", id),
            }
        );
        assert_eq!(agenda.get(id).unwrap().unwrap(), original);
        assert_eq!(agenda.alarms().inner.calls(), calls);
    }

    #[test]
    fn store_error_on_update_is_storage_failure() {
        let agenda = faulty_lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        let original = agenda.get(id).unwrap().unwrap();
        let calls = agenda.alarms().inner.calls();
        agenda.store().set_mode(WriteMode::Broken);

        let mut changes = changes_from(&original);
        changes.start = tomorrow_at(11, 0);
        changes.end = tomorrow_at(12, 0);

        assert_eq!(
            agenda.update(id, &changes),
            OperationResult::StorageFailure {
                message: format!("Storage error: {}", DISK_FULL),
            }
        );
        assert_eq!(agenda.get(id).unwrap().unwrap(), original);
        assert_eq!(agenda.alarms().inner.calls(), calls);
    }

    #[test]
    fn failed_reschedule_still_succeeds() {
        let agenda = faulty_lifecycle();
        let id = agenda.create(&standup()).id().unwrap();
        agenda.alarms().fail_schedule.set(true);

        let mut changes = changes_from(&agenda.get(id).unwrap().unwrap());
        changes.title = "Planning".to_string();
        changes.start = tomorrow_at(11, 0);
        changes.end = tomorrow_at(12, 0);

        assert_eq!(agenda.update(id, &changes), OperationResult::Success { id });

        let stored = agenda.get(id).unwrap().unwrap();
        assert_eq!(stored.title, "Planning");
        assert_eq!(stored.start, tomorrow_at(11, 0));
        assert_eq!(stored.end, tomorrow_at(12, 0));
        // The old alarm was cancelled before scheduling failed
        assert_eq!(agenda.alarms().inner.pending(id), None);
    }
}
