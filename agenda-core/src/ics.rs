//! ICS export.

use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};

use crate::event::Event;

/// Render events as a single iCalendar document, one VEVENT each with a
/// display alarm `remind_before` minutes ahead of the start.
pub fn export_ics(events: &[Event]) -> String {
    let mut cal = Calendar::new();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@agenda", event.id));
        ics_event.summary(&event.title);

        if let Some(ref note) = event.note
            && !note.is_empty()
        {
            ics_event.description(note);
        }

        ics_event.starts(event.start);
        ics_event.ends(event.end);

        let trigger = Trigger::before_start(chrono::Duration::minutes(i64::from(
            event.remind_before,
        )));
        ics_event.alarm(Alarm::display(&event.title, trigger));

        cal.push(ics_event.done());
    }

    cal.done().to_string()
}
