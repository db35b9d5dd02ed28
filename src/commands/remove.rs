use agenda_core::event::EventId;
use anyhow::Result;

use super::report;
use crate::app::Agenda;

pub fn run(agenda: &Agenda, id: EventId) -> Result<()> {
    report(agenda.delete(id), "Removed")
}
