//! Event storage.
//!
//! The lifecycle only talks to the [`EventStore`] contract. Two adapters
//! share the same [`EventTable`]: an in-process [`MemoryStore`] and a
//! [`JsonFileStore`] persisted in the data directory.

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use table::EventTable;

pub(crate) use json_file::{read_json, write_json};

use crate::error::AgendaResult;
use crate::event::{Event, EventId};

/// Durable record store for events, keyed by a storage-assigned id.
pub trait EventStore {
    /// Insert a new event and return its assigned id. A non-positive id
    /// means the insert did not happen.
    fn insert(&self, event: &Event) -> AgendaResult<EventId>;

    /// Replace the row with `event.id`. Returns the number of rows affected.
    fn update(&self, event: &Event) -> AgendaResult<usize>;

    /// Returns the number of rows removed.
    fn delete(&self, id: EventId) -> AgendaResult<usize>;

    fn get(&self, id: EventId) -> AgendaResult<Option<Event>>;

    /// All events, ordered by start time ascending.
    fn list(&self) -> AgendaResult<Vec<Event>>;

    /// Returns the number of rows removed.
    fn delete_all(&self) -> AgendaResult<usize>;
}
