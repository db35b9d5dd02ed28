use agenda_core::event::EventId;
use anyhow::{Result, bail};

use crate::app::Agenda;
use crate::render::render_details;

pub fn run(agenda: &Agenda, id: EventId) -> Result<()> {
    let Some(event) = agenda.get(id)? else {
        bail!("Event {} not found", id);
    };

    println!("{}", render_details(&event));
    Ok(())
}
