//! Process-wide wiring: one store, one alarm port and one clock.

use agenda_core::EventLifecycle;
use agenda_core::alarm::AlarmBook;
use agenda_core::config::AgendaConfig;
use agenda_core::storage::JsonFileStore;
use anyhow::{Context, Result};

pub type Agenda = EventLifecycle<JsonFileStore, AlarmBook>;

pub fn load_config() -> Result<AgendaConfig> {
    AgendaConfig::load().context("Could not load configuration")
}

pub fn alarm_book(config: &AgendaConfig) -> AlarmBook {
    AlarmBook::new(config.alarms_path(), config.exact_alarms)
}

pub fn agenda(config: &AgendaConfig) -> Agenda {
    EventLifecycle::new(
        JsonFileStore::new(config.events_path()),
        alarm_book(config),
        agenda_core::SystemClock,
    )
}
