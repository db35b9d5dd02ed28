use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use super::{AlarmPort, PendingAlarm};
use crate::error::AgendaResult;
use crate::event::EventId;

/// A call made against [`MemoryAlarms`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmCall {
    Schedule {
        event_id: EventId,
        trigger_at: DateTime<Utc>,
    },
    Cancel {
        event_id: EventId,
    },
}

#[derive(Debug)]
struct State {
    permitted: bool,
    pending: BTreeMap<EventId, PendingAlarm>,
    calls: Vec<AlarmCall>,
}

/// In-process alarm port that records every call.
#[derive(Debug)]
pub struct MemoryAlarms {
    state: Mutex<State>,
}

impl Default for MemoryAlarms {
    fn default() -> Self {
        MemoryAlarms {
            state: Mutex::new(State {
                permitted: true,
                pending: BTreeMap::new(),
                calls: Vec::new(),
            }),
        }
    }
}

impl MemoryAlarms {
    pub fn new() -> Self {
        Self::default()
    }

    /// A port whose host refuses exact scheduling.
    pub fn denying() -> Self {
        let alarms = Self::default();
        alarms.set_permitted(false);
        alarms
    }

    pub fn set_permitted(&self, permitted: bool) {
        self.state().permitted = permitted;
    }

    pub fn pending(&self, id: EventId) -> Option<PendingAlarm> {
        self.state().pending.get(&id).cloned()
    }

    pub fn calls(&self) -> Vec<AlarmCall> {
        self.state().calls.clone()
    }

    pub fn schedule_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, AlarmCall::Schedule { .. }))
            .count()
    }

    pub fn cancel_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, AlarmCall::Cancel { .. }))
            .count()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AlarmPort for MemoryAlarms {
    fn schedule(&self, id: EventId, label: &str, trigger_at: DateTime<Utc>) -> AgendaResult<bool> {
        let mut state = self.state();
        state.calls.push(AlarmCall::Schedule {
            event_id: id,
            trigger_at,
        });

        if !state.permitted {
            return Ok(false);
        }

        state.pending.insert(
            id,
            PendingAlarm {
                event_id: id,
                label: label.to_string(),
                trigger_at,
            },
        );
        Ok(true)
    }

    fn cancel(&self, id: EventId) -> AgendaResult<()> {
        let mut state = self.state();
        state.calls.push(AlarmCall::Cancel { event_id: id });
        state.pending.remove(&id);
        Ok(())
    }

    fn can_schedule_exact(&self) -> bool {
        self.state().permitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn trigger() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 8, 50, 0).unwrap()
    }

    #[test]
    fn denied_schedule_is_recorded_but_not_pending() {
        let alarms = MemoryAlarms::denying();
        assert!(!alarms.schedule(1, "Standup", trigger()).unwrap());
        assert_eq!(alarms.schedule_calls(), 1);
        assert_eq!(alarms.pending(1), None);
        assert!(!alarms.can_schedule_exact());
    }

    #[test]
    fn reschedule_cancels_then_schedules() {
        let alarms = MemoryAlarms::new();
        alarms.schedule(1, "Standup", trigger()).unwrap();
        let later = trigger() + chrono::Duration::hours(1);
        assert!(alarms.reschedule(1, "Standup", later).unwrap());

        let calls = alarms.calls();
        assert_eq!(
            &calls[1..],
            &[
                AlarmCall::Cancel { event_id: 1 },
                AlarmCall::Schedule {
                    event_id: 1,
                    trigger_at: later
                },
            ]
        );
        assert_eq!(alarms.pending(1).unwrap().trigger_at, later);
    }

    #[test]
    fn cancel_without_alarm_is_fine() {
        let alarms = MemoryAlarms::new();
        alarms.cancel(99).unwrap();
        assert_eq!(alarms.cancel_calls(), 1);
    }
}
