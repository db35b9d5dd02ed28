use agenda_core::SystemClock;
use agenda_core::alarm::{Dispatcher, PendingAlarm};
use agenda_core::config::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{info, warn};

use crate::app::alarm_book;
use crate::render::local;

pub async fn run(config: &AgendaConfig) -> Result<()> {
    let book = alarm_book(config);
    info!(alarms = %book.path().display(), "watching for reminders");

    let dispatcher = Dispatcher::new(
        book,
        print_reminder,
        SystemClock,
        config.poll_interval(),
    );

    println!("{}", "Watching for reminders (Ctrl-C to stop)".dimmed());
    dispatcher
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "could not listen for Ctrl-C, stopping");
            }
        })
        .await;

    Ok(())
}

fn print_reminder(alarm: &PendingAlarm) {
    // Terminal bell, then the reminder line
    print!("\x07");
    println!(
        "{} {} {}",
        local(alarm.trigger_at).format("%H:%M").to_string().dimmed(),
        "Reminder:".yellow().bold(),
        alarm.label
    );
}
