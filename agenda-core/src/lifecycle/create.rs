use chrono::{DateTime, Utc};
use tracing::info;

use super::{EventLifecycle, settle};
use crate::alarm::AlarmPort;
use crate::clock::{Clock, ClockTime};
use crate::error::AgendaResult;
use crate::event::{Event, NewEvent, ReminderRequest};
use crate::outcome::OperationResult;
use crate::storage::EventStore;
use crate::validator::{self, Boundary};

impl<S: EventStore, A: AlarmPort, C: Clock> EventLifecycle<S, A, C> {
    /// Create an event and schedule its reminder.
    ///
    /// Nothing is written unless every check passes, including that the
    /// start is still ahead of now. Once the record is written it stays,
    /// even when the reminder cannot be scheduled (`PermissionRequired`).
    pub fn create(&self, input: &NewEvent) -> OperationResult {
        settle(self.try_create(input))
    }

    fn try_create(&self, input: &NewEvent) -> Result<OperationResult, OperationResult> {
        // Field checks, before any time conversion
        validator::validate_title(&input.title)?;
        validator::validate_date_tag(&input.date)?;
        let start = validator::validate_clock_field(input.start, Boundary::Start)?;
        let end = validator::validate_clock_field(input.end, Boundary::End)?;
        validator::validate_clock_ordering(start, end)?;

        let (start_at, end_at) = self.resolve_window(&input.date, start, end)?;

        // Conversion can move instants (offset changes), so check again
        validator::validate_instant_ordering(start_at, end_at)?;
        validator::validate_not_past(start_at, self.clock.now())?;

        let mut event = Event::draft(
            &input.title,
            input.note.as_deref(),
            start_at,
            end_at,
            input.remind_before,
        );

        event.id = self.store.insert(&event)?;
        if event.id <= 0 {
            return Err(OperationResult::storage_failure("Could not save event"));
        }

        info!(event_id = event.id, title = %event.title, start = %event.start, "event created");

        Ok(self.schedule_outcome(&ReminderRequest::for_event(&event), false))
    }

    /// Turn the date tag and clock fields into absolute instants.
    fn resolve_window(
        &self,
        date_tag: &str,
        start: ClockTime,
        end: ClockTime,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), OperationResult> {
        let convert = || -> AgendaResult<(DateTime<Utc>, DateTime<Utc>)> {
            let date = self.clock.parse_date_tag(date_tag)?;
            Ok((
                self.clock.combine(date, start)?,
                self.clock.combine(date, end)?,
            ))
        };

        convert().map_err(|e| OperationResult::ValidationError {
            message: e.to_string(),
        })
    }
}
