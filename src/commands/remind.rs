use agenda_core::config::AgendaConfig;
use agenda_core::event::EventId;
use anyhow::{Result, bail};

use super::report;
use crate::app::Agenda;

pub fn run(agenda: &Agenda, id: EventId) -> Result<()> {
    if !agenda.reminders_permitted() {
        let config_path = AgendaConfig::config_path()?;
        bail!(
            "Exact-time reminders are disabled.\n\n\
            Enable them with:\n  \
            agenda config --exact-alarms true\n\n\
            or set exact_alarms = true in {}",
            config_path.display()
        );
    }

    report(agenda.schedule_reminder(id), "Reminder set for")
}
