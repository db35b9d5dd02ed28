//! Terminal rendering for agenda types.
//!
//! Date and time helpers work on local wall-clock values; callers convert
//! stored UTC instants with [`local`] first.

use agenda_core::Event;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// One line: `#3  09:00 - 09:30  Standup  (10 min before)`
    fn render(&self) -> String {
        let start = local(self.start);
        let end = local(self.end);

        let range = format_time_range(start, end);

        let id = format!("#{}", self.id);
        let reminder = format!("({} min before)", self.remind_before);

        format!(
            "{:>4}  {}  {}  {}",
            id.dimmed(),
            range,
            self.title.bold(),
            reminder.dimmed()
        )
    }
}

/// Multi-line detail view used by `show`.
pub fn render_details(event: &Event) -> String {
    let start = local(event.start);
    let end = local(event.end);

    let mut lines = vec![
        event.title.bold().to_string(),
        format!(
            "  {} {}",
            day_name(start.date()),
            format_display_date(start.date())
        ),
        format!("  {}", format_time_range(start, end)),
    ];

    if end.date() != start.date() {
        lines.push(format!("  until {}", format_display_date(end.date())).dimmed().to_string());
    }

    let alarm = local(event.alarm_time());
    lines.push(format!(
        "  Reminder at {} ({} min before)",
        alarm.format("%H:%M"),
        event.remind_before
    ));

    if let Some(ref note) = event.note
        && !note.is_empty()
    {
        lines.push(String::new());
        lines.push(format!("  {}", note));
    }

    lines.push(format!("  id {}", event.id).dimmed().to_string());
    lines.join("\n")
}

/// A stored instant as local wall-clock time.
pub fn local(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}

/// `13/12/2025`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `07:30 - 09:00`
pub fn format_time_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!(
        "{:02}:{:02} - {:02}:{:02}",
        start.hour(),
        start.minute(),
        end.hour(),
        end.minute()
    )
}

pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Before noon.
pub fn is_morning(time: NaiveDateTime) -> bool {
    time.hour() < 12
}

/// Sub-heading for events within a day.
pub fn part_of_day(time: NaiveDateTime) -> &'static str {
    if is_morning(time) { "Morning" } else { "Afternoon" }
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Day label used as a heading when listing: `Monday 12/10/2026`
pub fn day_header(date: NaiveDate) -> String {
    format!("{} {}", day_name(date), format_display_date(date))
}

/// `Week of 12/10/2026 - 18/10/2026`
pub fn week_header(date: NaiveDate) -> String {
    let start = week_start(date);
    format!(
        "Week of {} - {}",
        format_display_date(start),
        format_display_date(start + Duration::days(6))
    )
}
