use agenda_core::event::EventId;
use agenda_core::{Clock, ClockTime, Event, EventChanges};
use anyhow::{Context, Result, bail};

use super::{parse_remind_before, report};
use crate::app::Agenda;
use crate::render::local;

pub struct EditArgs {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub note: Option<String>,
    pub remind: Option<String>,
}

pub fn run(agenda: &Agenda, id: EventId, args: EditArgs) -> Result<()> {
    let Some(event) = agenda.get(id)? else {
        bail!("Event {} not found", id);
    };

    let changes = merge(agenda.clock(), &event, args)?;
    report(agenda.update(id, &changes), "Updated")
}

/// Build a full replacement from the stored event and the given fields.
///
/// Without `--end` the event keeps its length. An explicit end time is on
/// the same day as the start.
fn merge(clock: &impl Clock, event: &Event, args: EditArgs) -> Result<EventChanges> {
    let current_start = local(event.start);

    let start = if args.date.is_some() || args.start.is_some() {
        let date = match args.date {
            Some(ref tag) => clock.parse_date_tag(tag)?,
            None => current_start.date(),
        };
        let time = args.start.unwrap_or_else(|| current_start.time().into());

        clock
            .combine(date, time)
            .context("Could not resolve the start time")?
    } else {
        event.start
    };

    let end = match args.end {
        Some(time) => clock
            .combine(local(start).date(), time)
            .context("Could not resolve the end time")?,
        None => start + (event.end - event.start),
    };

    let remind_before = match args.remind {
        Some(ref input) => parse_remind_before(input)?,
        None => event.remind_before,
    };

    let note = match args.note {
        Some(note) if note.is_empty() => None,
        Some(note) => Some(note),
        None => event.note.clone(),
    };

    Ok(EventChanges {
        title: args.title.unwrap_or_else(|| event.title.clone()),
        note,
        start,
        end,
        remind_before,
    })
}
