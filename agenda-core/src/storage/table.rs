//! The row table shared by the storage adapters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};

/// Events keyed by id, plus the counter that hands out new ids.
///
/// Ids start at 1 and are never reused, even after rows are deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTable {
    next_id: EventId,
    events: BTreeMap<EventId, Event>,
}

impl Default for EventTable {
    fn default() -> Self {
        EventTable {
            next_id: 1,
            events: BTreeMap::new(),
        }
    }
}

impl EventTable {
    pub fn insert(&mut self, event: &Event) -> EventId {
        let id = self.next_id;
        self.next_id += 1;

        let mut row = event.clone();
        row.id = id;
        self.events.insert(id, row);

        id
    }

    pub fn update(&mut self, event: &Event) -> usize {
        match self.events.get_mut(&event.id) {
            Some(row) => {
                *row = event.clone();
                1
            }
            None => 0,
        }
    }

    pub fn delete(&mut self, id: EventId) -> usize {
        usize::from(self.events.remove(&id).is_some())
    }

    pub fn get(&self, id: EventId) -> Option<Event> {
        self.events.get(&id).cloned()
    }

    /// Ordered by start time; ties keep insertion (id) order.
    pub fn list(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.values().cloned().collect();
        events.sort_by_key(|e| e.start);
        events
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.events.len();
        self.events.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn event_at(title: &str, hour: u32) -> Event {
        let start = Utc.with_ymd_and_hms(2026, 10, 16, hour, 0, 0).unwrap();
        Event::draft(title, None, start, start + Duration::minutes(30), 0)
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut table = EventTable::default();
        assert_eq!(table.insert(&event_at("First", 9)), 1);
        assert_eq!(table.insert(&event_at("Second", 10)), 2);
        assert_eq!(table.get(2).unwrap().title, "Second");
    }

    #[test]
    fn ids_are_not_reused() {
        let mut table = EventTable::default();
        let first = table.insert(&event_at("First", 9));
        table.delete(first);
        table.clear();
        assert_eq!(table.insert(&event_at("Again", 9)), 2);
    }

    #[test]
    fn list_orders_by_start_time() {
        let mut table = EventTable::default();
        table.insert(&event_at("Late", 15));
        table.insert(&event_at("Early", 8));
        table.insert(&event_at("Noon", 12));

        let titles: Vec<String> = table.list().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Early", "Noon", "Late"]);
    }

    #[test]
    fn update_missing_row_affects_nothing() {
        let mut table = EventTable::default();
        let mut ghost = event_at("Ghost", 9);
        ghost.id = 42;
        assert_eq!(table.update(&ghost), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn delete_reports_rows_removed() {
        let mut table = EventTable::default();
        let id = table.insert(&event_at("Gone", 9));
        assert_eq!(table.delete(id), 1);
        assert_eq!(table.delete(id), 0);
    }
}
