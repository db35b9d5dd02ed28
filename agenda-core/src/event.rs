//! Event types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// Storage-assigned event identity. Non-positive values never identify a
/// persisted event.
pub type EventId = i64;

/// A user-created event with a reminder offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// 0 until storage assigns an id on insert
    pub id: EventId,
    pub title: String,
    pub note: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Minutes before `start` at which the reminder fires (0 = at start)
    pub remind_before: u32,
}

impl Event {
    /// An event that has not been persisted yet.
    pub fn draft(
        title: &str,
        note: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        remind_before: u32,
    ) -> Self {
        Event {
            id: 0,
            title: title.to_string(),
            note: note.map(str::to_string),
            start,
            end,
            remind_before,
        }
    }

    pub fn alarm_time(&self) -> DateTime<Utc> {
        alarm_time(self.start, self.remind_before)
    }

    /// Replace every mutable field. Identity is left untouched.
    pub fn apply(&mut self, changes: &EventChanges) {
        self.title = changes.title.clone();
        self.note = changes.note.clone();
        self.start = changes.start;
        self.end = changes.end;
        self.remind_before = changes.remind_before;
    }
}

/// Input for creating an event from a date tag and wall-clock fields.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub note: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `None` when no start time was picked
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub remind_before: u32,
}

/// Full replacement of an existing event's mutable fields.
#[derive(Debug, Clone)]
pub struct EventChanges {
    pub title: String,
    pub note: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub remind_before: u32,
}

/// The reminder to schedule for an event. Computed fresh on every
/// create/update and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub event_id: EventId,
    pub label: String,
    pub alarm_time: DateTime<Utc>,
}

impl ReminderRequest {
    pub fn for_event(event: &Event) -> Self {
        ReminderRequest {
            event_id: event.id,
            label: event.title.clone(),
            alarm_time: event.alarm_time(),
        }
    }
}

fn alarm_time(start: DateTime<Utc>, remind_before: u32) -> DateTime<Utc> {
    start - Duration::minutes(i64::from(remind_before))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_test_event() -> Event {
        Event {
            id: 7,
            title: "Standup".to_string(),
            note: None,
            start: Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
            remind_before: 10,
        }
    }

    #[test]
    fn alarm_time_subtracts_remind_before() {
        let event = make_test_event();
        assert_eq!(
            event.alarm_time(),
            Utc.with_ymd_and_hms(2026, 10, 16, 8, 50, 0).unwrap()
        );
    }

    #[test]
    fn zero_remind_before_fires_at_start() {
        let mut event = make_test_event();
        event.remind_before = 0;
        assert_eq!(event.alarm_time(), event.start);
    }

    #[test]
    fn apply_overwrites_all_fields_but_id() {
        let mut event = make_test_event();
        event.note = Some("bring notes".to_string());

        let changes = EventChanges {
            title: "Retro".to_string(),
            note: None,
            start: Utc.with_ymd_and_hms(2026, 10, 17, 14, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 10, 17, 15, 0, 0).unwrap(),
            remind_before: 30,
        };
        event.apply(&changes);

        assert_eq!(event.id, 7);
        assert_eq!(event.title, "Retro");
        assert_eq!(event.note, None);
        assert_eq!(event.start, changes.start);
        assert_eq!(event.end, changes.end);
        assert_eq!(event.remind_before, 30);
    }

    #[test]
    fn reminder_request_uses_title_as_label() {
        let request = ReminderRequest::for_event(&make_test_event());
        assert_eq!(request.event_id, 7);
        assert_eq!(request.label, "Standup");
        assert_eq!(
            request.alarm_time,
            Utc.with_ymd_and_hms(2026, 10, 16, 8, 50, 0).unwrap()
        );
    }
}
