use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::app::Agenda;

pub fn run(agenda: &Agenda, yes: bool) -> Result<()> {
    if !yes {
        bail!("This deletes every event and reminder. Run again with --yes to confirm.");
    }

    let removed = agenda.clear_all()?;
    let noun = if removed == 1 { "event" } else { "events" };
    println!("{}", format!("  Removed {} {}", removed, noun).green());

    Ok(())
}
