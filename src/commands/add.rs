use agenda_core::{ClockTime, NewEvent};
use anyhow::Result;

use super::{parse_remind_before, report};
use crate::app::Agenda;

pub struct AddArgs {
    pub title: String,
    pub date: String,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub note: Option<String>,
    pub remind: Option<String>,
}

pub fn run(agenda: &Agenda, args: AddArgs, default_remind_before: u32) -> Result<()> {
    let remind_before = match args.remind {
        Some(ref input) => parse_remind_before(input)?,
        None => default_remind_before,
    };

    let input = NewEvent {
        title: args.title,
        note: args.note,
        date: args.date,
        start: args.start,
        end: args.end,
        remind_before,
    };

    report(agenda.create(&input), "Added")
}
