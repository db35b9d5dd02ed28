//! Event store persisted as a JSON document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{EventStore, EventTable};
use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventId};

/// Stores the whole event table in one file (e.g. `~/.agenda/events.json`).
///
/// Every operation re-reads the file, so several processes see each other's
/// writes. There is no locking; concurrent writers can lose updates.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AgendaResult<EventTable> {
        read_json(&self.path)
    }

    fn save(&self, table: &EventTable) -> AgendaResult<()> {
        write_json(&self.path, table)
    }

    /// Load, mutate and write back the table.
    fn modify<T>(&self, f: impl FnOnce(&mut EventTable) -> T) -> AgendaResult<T> {
        let mut table = self.load()?;
        let result = f(&mut table);
        self.save(&table)?;
        Ok(result)
    }
}

impl EventStore for JsonFileStore {
    fn insert(&self, event: &Event) -> AgendaResult<EventId> {
        self.modify(|table| table.insert(event))
    }

    fn update(&self, event: &Event) -> AgendaResult<usize> {
        self.modify(|table| table.update(event))
    }

    fn delete(&self, id: EventId) -> AgendaResult<usize> {
        self.modify(|table| table.delete(id))
    }

    fn get(&self, id: EventId) -> AgendaResult<Option<Event>> {
        Ok(self.load()?.get(id))
    }

    fn list(&self) -> AgendaResult<Vec<Event>> {
        Ok(self.load()?.list())
    }

    fn delete_all(&self) -> AgendaResult<usize> {
        self.modify(EventTable::clear)
    }
}

/// Read a JSON document, treating a missing file as the default value.
pub(crate) fn read_json<T: DeserializeOwned + Default>(path: &Path) -> AgendaResult<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        AgendaError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write a JSON document through a temp file so readers never see a
/// half-written file.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> AgendaResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");

    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;

    Ok(())
}
