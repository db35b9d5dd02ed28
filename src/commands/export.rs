use std::path::Path;

use agenda_core::ics::export_ics;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::app::Agenda;

pub fn run(agenda: &Agenda, output: Option<&Path>) -> Result<()> {
    let events = agenda.list()?;
    let ics = export_ics(&events);

    match output {
        Some(path) => {
            std::fs::write(path, ics)
                .with_context(|| format!("Could not write {}", path.display()))?;
            let noun = if events.len() == 1 { "event" } else { "events" };
            eprintln!(
                "{}",
                format!("  Exported {} {} to {}", events.len(), noun, path.display()).green()
            );
        }
        None => print!("{}", ics),
    }

    Ok(())
}
