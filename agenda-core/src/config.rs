//! Global agenda configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_DATA_DIR: &str = "~/.agenda";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_exact_alarms() -> bool {
    true
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

/// Configuration at ~/.config/agenda/config.toml
///
/// Every key can be overridden from the environment with an `AGENDA_`
/// prefix, e.g. `AGENDA_EXACT_ALARMS=false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// Where events.json and alarms.json live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Whether the host permits exact-time reminders
    #[serde(default = "default_exact_alarms")]
    pub exact_alarms: bool,

    /// Reminder offset (minutes) used when none is given
    #[serde(default)]
    pub default_remind_before: u32,

    /// Upper bound on how long `watch` sleeps between passes
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_dir: default_data_dir(),
            exact_alarms: default_exact_alarms(),
            default_remind_before: 0,
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl AgendaConfig {
    /// Load the config, creating a commented-out default file on first use.
    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> AgendaResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("AGENDA").try_parsing(true))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))
    }

    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn events_path(&self) -> PathBuf {
        self.data_path().join("events.json")
    }

    pub fn alarms_path(&self) -> PathBuf {
        self.data_path().join("alarms.json")
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    /// Save the current config to `path`.
    pub fn save(&self, path: &Path) -> AgendaResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = format!(
            "\
# agenda configuration

# Where events and pending reminders are stored:
# data_dir = \"{}\"

# Set to false if this machine cannot deliver exact-time reminders.
# New events are still saved, but their reminders are held back until
# this is enabled and `agenda remind <id>` is run:
# exact_alarms = true

# Minutes before an event's start to remind, when --remind is not given:
# default_remind_before = 0

# Longest time `agenda watch` sleeps before re-reading pending reminders:
# poll_interval_secs = {}
",
            DEFAULT_DATA_DIR, DEFAULT_POLL_INTERVAL_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
