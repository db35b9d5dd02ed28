use std::cell::Cell;

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::EventLifecycle;
use crate::alarm::{AlarmPort, MemoryAlarms};
use crate::clock::{ClockTime, ManualClock};
use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventId, NewEvent};
use crate::storage::{EventStore, MemoryStore};

pub type TestLifecycle = EventLifecycle<MemoryStore, MemoryAlarms, ManualClock>;

/// 2026-10-15 08:00 UTC; the manual clock's wall clock is UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 8, 0, 0).unwrap()
}

pub fn lifecycle() -> TestLifecycle {
    EventLifecycle::new(MemoryStore::new(), MemoryAlarms::new(), ManualClock::new(now()))
}

pub fn denying_lifecycle() -> TestLifecycle {
    EventLifecycle::new(
        MemoryStore::new(),
        MemoryAlarms::denying(),
        ManualClock::new(now()),
    )
}

pub fn tomorrow_tag() -> String {
    (now() + Duration::days(1)).format("%Y-%m-%d").to_string()
}

pub fn tomorrow_at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, hour, minute, 0).unwrap()
}

/// Standup tomorrow 09:00-09:30, reminder 10 minutes ahead.
pub fn standup() -> NewEvent {
    NewEvent {
        title: "Standup".to_string(),
        note: Some(String::new()),
        date: tomorrow_tag(),
        start: Some(ClockTime::new(9, 0)),
        end: Some(ClockTime::new(9, 30)),
        remind_before: 10,
    }
}

/// How a [`FaultyStore`] treats writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Normal,
    /// Writes succeed but touch no rows
    NoRows,
    /// Writes fail with a storage error
    Broken,
}

/// A memory store whose writes can be switched to misbehave. Reads always
/// go to the underlying table.
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    mode: Cell<WriteMode>,
}

pub const DISK_FULL: &str = "disk full";

impl FaultyStore {
    pub fn set_mode(&self, mode: WriteMode) {
        self.mode.set(mode);
    }

    fn write<T>(&self, no_rows: T, op: impl FnOnce() -> AgendaResult<T>) -> AgendaResult<T> {
        match self.mode.get() {
            WriteMode::Normal => op(),
            WriteMode::NoRows => Ok(no_rows),
            WriteMode::Broken => Err(AgendaError::Storage(DISK_FULL.to_string())),
        }
    }
}

impl EventStore for FaultyStore {
    fn insert(&self, event: &Event) -> AgendaResult<EventId> {
        self.write(0, || self.inner.insert(event))
    }

    fn update(&self, event: &Event) -> AgendaResult<usize> {
        self.write(0, || self.inner.update(event))
    }

    fn delete(&self, id: EventId) -> AgendaResult<usize> {
        self.write(0, || self.inner.delete(id))
    }

    fn get(&self, id: EventId) -> AgendaResult<Option<Event>> {
        self.inner.get(id)
    }

    fn list(&self) -> AgendaResult<Vec<Event>> {
        self.inner.list()
    }

    fn delete_all(&self) -> AgendaResult<usize> {
        self.write(0, || self.inner.delete_all())
    }
}

/// Memory alarms whose `schedule` can be made to fail.
#[derive(Default)]
pub struct FaultyAlarms {
    pub inner: MemoryAlarms,
    pub fail_schedule: Cell<bool>,
}

pub const TIMER_DOWN: &str = "timer unavailable";

impl AlarmPort for FaultyAlarms {
    fn schedule(&self, id: EventId, label: &str, trigger_at: DateTime<Utc>) -> AgendaResult<bool> {
        if self.fail_schedule.get() {
            return Err(AgendaError::Alarm(TIMER_DOWN.to_string()));
        }
        self.inner.schedule(id, label, trigger_at)
    }

    fn cancel(&self, id: EventId) -> AgendaResult<()> {
        self.inner.cancel(id)
    }

    fn can_schedule_exact(&self) -> bool {
        self.inner.can_schedule_exact()
    }
}

pub fn faulty_lifecycle() -> EventLifecycle<FaultyStore, FaultyAlarms, ManualClock> {
    EventLifecycle::new(
        FaultyStore::default(),
        FaultyAlarms::default(),
        ManualClock::new(now()),
    )
}
