//! Pending alarms kept on disk until the dispatcher fires them.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AlarmPort, PendingAlarm};
use crate::error::{AgendaError, AgendaResult};
use crate::event::EventId;
use crate::storage::{read_json, write_json};

#[derive(Debug, Default, Serialize, Deserialize)]
struct AlarmTable {
    alarms: Vec<PendingAlarm>,
}

impl AlarmTable {
    fn upsert(&mut self, alarm: PendingAlarm) {
        self.remove(alarm.event_id);
        self.alarms.push(alarm);
        self.alarms.sort_by_key(|a| (a.trigger_at, a.event_id));
    }

    fn remove(&mut self, id: EventId) -> bool {
        let before = self.alarms.len();
        self.alarms.retain(|a| a.event_id != id);
        self.alarms.len() != before
    }
}

/// Durable [`AlarmPort`] backed by `alarms.json`.
///
/// Exact scheduling is permitted or not for the whole book, as configured by
/// `exact_alarms`. When it is not, `schedule` refuses and writes nothing.
#[derive(Debug, Clone)]
pub struct AlarmBook {
    path: PathBuf,
    exact_permitted: bool,
}

impl AlarmBook {
    pub fn new(path: impl Into<PathBuf>, exact_permitted: bool) -> Self {
        AlarmBook {
            path: path.into(),
            exact_permitted,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All pending alarms, soonest first.
    pub fn pending(&self) -> AgendaResult<Vec<PendingAlarm>> {
        Ok(self.load()?.alarms)
    }

    pub fn next_trigger(&self) -> AgendaResult<Option<DateTime<Utc>>> {
        Ok(self.load()?.alarms.first().map(|a| a.trigger_at))
    }

    /// Remove and return every alarm whose trigger is at or before `now`.
    pub fn take_due(&self, now: DateTime<Utc>) -> AgendaResult<Vec<PendingAlarm>> {
        let mut table = self.load()?;
        let (due, pending): (Vec<_>, Vec<_>) =
            table.alarms.into_iter().partition(|a| a.trigger_at <= now);

        if due.is_empty() {
            return Ok(due);
        }

        table.alarms = pending;
        self.save(&table)?;
        Ok(due)
    }

    fn load(&self) -> AgendaResult<AlarmTable> {
        read_json(&self.path).map_err(|e| self.fault(e))
    }

    fn save(&self, table: &AlarmTable) -> AgendaResult<()> {
        write_json(&self.path, table).map_err(|e| self.fault(e))
    }

    fn fault(&self, e: AgendaError) -> AgendaError {
        AgendaError::Alarm(format!("{}: {}", self.path.display(), e))
    }
}

impl AlarmPort for AlarmBook {
    fn schedule(&self, id: EventId, label: &str, trigger_at: DateTime<Utc>) -> AgendaResult<bool> {
        if !self.exact_permitted {
            return Ok(false);
        }

        let mut table = self.load()?;
        table.upsert(PendingAlarm {
            event_id: id,
            label: label.to_string(),
            trigger_at,
        });
        self.save(&table)?;

        debug!(event_id = id, %trigger_at, "alarm scheduled");
        Ok(true)
    }

    fn cancel(&self, id: EventId) -> AgendaResult<()> {
        let mut table = self.load()?;
        if table.remove(id) {
            self.save(&table)?;
            debug!(event_id = id, "alarm cancelled");
        }
        Ok(())
    }

    fn can_schedule_exact(&self) -> bool {
        self.exact_permitted
    }
}
