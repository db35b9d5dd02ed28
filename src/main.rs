mod app;
mod commands;
mod render;

use std::path::PathBuf;

use agenda_core::ClockTime;
use agenda_core::event::EventId;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Keep a local agenda and get reminded before events start")]
struct Cli {
    /// Log what the agenda is doing (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event
    Add {
        /// Event title (at least 3 characters)
        title: String,

        /// Day of the event (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<ClockTime>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<ClockTime>,

        /// Free-form note shown with the event
        #[arg(short, long)]
        note: Option<String>,

        /// How long before the start to remind (e.g. "10", "10m", "1h")
        #[arg(short, long)]
        remind: Option<String>,
    },
    /// Change an event. Fields that are not given keep their current value
    Edit {
        /// Event id (see `agenda list`)
        id: EventId,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// Move the event to this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(short, long)]
        start: Option<ClockTime>,

        /// New end time on the start's day (HH:MM). Without it the event keeps its length
        #[arg(short, long)]
        end: Option<ClockTime>,

        /// New note (pass "" to remove it)
        #[arg(short, long)]
        note: Option<String>,

        /// New reminder offset (e.g. "10", "10m", "1h")
        #[arg(short, long)]
        remind: Option<String>,
    },
    /// Delete an event and its reminder
    Rm { id: EventId },
    /// List events by day
    List {
        /// Only show the week (Monday to Sunday) containing this day (YYYY-MM-DD)
        #[arg(short, long)]
        week: Option<String>,
    },
    /// Show one event
    Show { id: EventId },
    /// Schedule an event's reminder again (e.g. after enabling exact alarms)
    Remind { id: EventId },
    /// Deliver reminders as they come due, until interrupted
    Watch,
    /// Export all events as iCalendar
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete every event and reminder
    Clear {
        /// Confirm that everything should be deleted
        #[arg(long)]
        yes: bool,
    },
    /// Show configuration and data paths
    Config {
        /// Allow or forbid exact-time reminders
        #[arg(long)]
        exact_alarms: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, matches!(cli.command, Commands::Watch));

    let config = app::load_config()?;

    match cli.command {
        Commands::Add {
            title,
            date,
            start,
            end,
            note,
            remind,
        } => commands::add::run(
            &app::agenda(&config),
            commands::add::AddArgs {
                title,
                date,
                start,
                end,
                note,
                remind,
            },
            config.default_remind_before,
        ),
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            note,
            remind,
        } => commands::edit::run(
            &app::agenda(&config),
            id,
            commands::edit::EditArgs {
                title,
                date,
                start,
                end,
                note,
                remind,
            },
        ),
        Commands::Rm { id } => commands::remove::run(&app::agenda(&config), id),
        Commands::List { week } => commands::list::run(&app::agenda(&config), week.as_deref()),
        Commands::Show { id } => commands::show::run(&app::agenda(&config), id),
        Commands::Remind { id } => commands::remind::run(&app::agenda(&config), id),
        Commands::Watch => commands::watch::run(&config).await,
        Commands::Export { output } => {
            commands::export::run(&app::agenda(&config), output.as_deref())
        }
        Commands::Clear { yes } => commands::clear::run(&app::agenda(&config), yes),
        Commands::Config { exact_alarms } => commands::config::run(config, exact_alarms),
    }
}

/// Logs go to stderr so that command output (e.g. `export`) stays clean.
fn init_tracing(verbose: bool, watching: bool) {
    let default_filter = if verbose {
        "warn,agenda=debug,agenda_core=debug"
    } else if watching {
        "warn,agenda=info,agenda_core=info"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
