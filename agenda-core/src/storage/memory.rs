use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{EventStore, EventTable};
use crate::error::AgendaResult;
use crate::event::{Event, EventId};

/// Process-local event store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<EventTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    fn table(&self) -> MutexGuard<'_, EventTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventStore for MemoryStore {
    fn insert(&self, event: &Event) -> AgendaResult<EventId> {
        Ok(self.table().insert(event))
    }

    fn update(&self, event: &Event) -> AgendaResult<usize> {
        Ok(self.table().update(event))
    }

    fn delete(&self, id: EventId) -> AgendaResult<usize> {
        Ok(self.table().delete(id))
    }

    fn get(&self, id: EventId) -> AgendaResult<Option<Event>> {
        Ok(self.table().get(id))
    }

    fn list(&self) -> AgendaResult<Vec<Event>> {
        Ok(self.table().list())
    }

    fn delete_all(&self) -> AgendaResult<usize> {
        Ok(self.table().clear())
    }
}
