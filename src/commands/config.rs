use agenda_core::alarm::PendingAlarm;
use agenda_core::config::AgendaConfig;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::app::alarm_book;
use crate::render::{format_display_date, local};

pub fn run(mut config: AgendaConfig, exact_alarms: Option<bool>) -> Result<()> {
    let config_path = AgendaConfig::config_path()?;

    if let Some(exact_alarms) = exact_alarms {
        config.exact_alarms = exact_alarms;
        config.save(&config_path)?;
        println!("{}", format!("  exact_alarms = {}", exact_alarms).green());
        println!();
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Events:     {}", config.events_path().display());
    println!("  Reminders:  {}", config.alarms_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  exact_alarms:          {}", config.exact_alarms);
    println!("  default_remind_before: {} min", config.default_remind_before);
    println!("  poll_interval_secs:    {}", config.poll_interval_secs);

    let pending = alarm_book(&config)
        .pending()
        .context("Could not read pending reminders")?;

    println!();
    println!("{}", "Pending reminders".bold());
    if pending.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for alarm in &pending {
        println!("{}", pending_line(alarm));
    }

    Ok(())
}

/// `  #3  16/10/2026 08:50  Standup`
fn pending_line(alarm: &PendingAlarm) -> String {
    let at = local(alarm.trigger_at);
    format!(
        "  #{}  {} {}  {}",
        alarm.event_id,
        format_display_date(at.date()),
        at.format("%H:%M"),
        alarm.label
    )
}
