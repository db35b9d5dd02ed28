pub mod add;
pub mod clear;
pub mod config;
pub mod edit;
pub mod export;
pub mod list;
pub mod remind;
pub mod remove;
pub mod show;
pub mod watch;

use agenda_core::OperationResult;
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;

/// Print a lifecycle outcome. Anything but a saved event is an error.
pub fn report(outcome: OperationResult, action: &str) -> Result<()> {
    match outcome {
        OperationResult::Success { id } => {
            println!("{}", format!("  {} event {}", action, id).green());
            Ok(())
        }
        OperationResult::PermissionRequired { id, message } => {
            println!("{}", format!("  {} event {}", action, id).green());
            println!("  {}", message.yellow());
            println!(
                "  {}",
                format!(
                    "Set exact_alarms = true (agenda config --exact-alarms true), then run: agenda remind {}",
                    id
                )
                .dimmed()
            );
            Ok(())
        }
        OperationResult::ValidationError { message } => bail!(message),
        OperationResult::NotFound => bail!("Event not found"),
        OperationResult::StorageFailure { message } => bail!(message),
    }
}

/// Minutes to remind before a start. Accepts a plain number of minutes or a
/// duration such as "1h" or "90m".
pub fn parse_remind_before(input: &str) -> Result<u32> {
    let input = input.trim();

    if let Ok(minutes) = input.parse::<u32>() {
        return Ok(minutes);
    }

    let duration = humantime::parse_duration(input)
        .with_context(|| format!("Could not parse reminder offset: \"{}\"", input))?;

    if duration.as_secs() % 60 != 0 {
        bail!("Reminder offset must be whole minutes: \"{}\"", input);
    }

    u32::try_from(duration.as_secs() / 60).context("Reminder offset too large")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remind_plain_minutes() {
        assert_eq!(parse_remind_before("10").unwrap(), 10);
        assert_eq!(parse_remind_before(" 0 ").unwrap(), 0);
    }

    #[test]
    fn remind_humantime() {
        assert_eq!(parse_remind_before("15m").unwrap(), 15);
        assert_eq!(parse_remind_before("1h").unwrap(), 60);
        assert_eq!(parse_remind_before("1h 30m").unwrap(), 90);
        assert_eq!(parse_remind_before("2days").unwrap(), 2880);
    }

    #[test]
    fn remind_rejects_garbage_and_fractions() {
        assert!(parse_remind_before("soon").is_err());
        assert!(parse_remind_before("-5").is_err());
        assert!(parse_remind_before("90s").is_err());
    }

    #[test]
    fn failed_outcomes_are_errors() {
        assert!(report(OperationResult::Success { id: 1 }, "Added").is_ok());
        assert!(
            report(
                OperationResult::PermissionRequired {
                    id: 1,
                    message: "needs consent".to_string()
                },
                "Added"
            )
            .is_ok()
        );

        let err = report(
            OperationResult::ValidationError {
                message: "Please enter a title".to_string(),
            },
            "Added",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a title");

        assert!(report(OperationResult::NotFound, "Removed").is_err());
    }
}
