use agenda_core::Event;
use agenda_core::clock::parse_date_tag;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;

use crate::app::Agenda;
use crate::render::{Render, day_header, local, part_of_day, week_header, week_start};

pub fn run(agenda: &Agenda, week: Option<&str>) -> Result<()> {
    let mut events = agenda.list()?;

    if let Some(tag) = week {
        let day = parse_date_tag(tag)?;
        events.retain(|e| in_week(e, day));
        println!("{}", week_header(day).bold());
        println!();
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (i, (day, day_events)) in group_by_day(&events).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", day_header(*day).bold());

        for (part, part_events) in by_part_of_day(day_events) {
            println!("  {}", part.dimmed());
            for event in part_events {
                println!("{}", event.render());
            }
        }
    }

    Ok(())
}

/// Whether the event starts in the Monday-to-Sunday week containing `day`.
fn in_week(event: &Event, day: NaiveDate) -> bool {
    let monday = week_start(day);
    let date = local(event.start).date();
    date >= monday && date < monday + Duration::days(7)
}

/// Consecutive events that start on the same local day. Input is ordered by
/// start, so each day appears once.
fn group_by_day(events: &[Event]) -> Vec<(NaiveDate, Vec<&Event>)> {
    let mut days: Vec<(NaiveDate, Vec<&Event>)> = Vec::new();

    for event in events {
        let date = local(event.start).date();
        match days.last_mut() {
            Some((day, day_events)) if *day == date => day_events.push(event),
            _ => days.push((date, vec![event])),
        }
    }

    days
}

/// Split one day's events into morning and afternoon runs, in start order.
fn by_part_of_day<'a>(events: &[&'a Event]) -> Vec<(&'static str, Vec<&'a Event>)> {
    let mut parts: Vec<(&'static str, Vec<&'a Event>)> = Vec::new();

    for &event in events {
        let part = part_of_day(local(event.start));
        match parts.last_mut() {
            Some((current, part_events)) if *current == part => part_events.push(event),
            _ => parts.push((part, vec![event])),
        }
    }

    parts
}
