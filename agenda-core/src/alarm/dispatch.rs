//! Delivery of due alarms.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::{AlarmBook, PendingAlarm};
use crate::clock::{Clock, SystemClock};
use crate::error::AgendaResult;

/// Receives alarms as they fire.
pub trait Notifier {
    fn notify(&self, alarm: &PendingAlarm);
}

impl<F: Fn(&PendingAlarm)> Notifier for F {
    fn notify(&self, alarm: &PendingAlarm) {
        self(alarm)
    }
}

/// Fires alarms from an [`AlarmBook`] when they come due.
///
/// The book is re-read on every pass, so alarms scheduled by other processes
/// are picked up within one poll interval.
pub struct Dispatcher<N, C = SystemClock> {
    book: AlarmBook,
    notifier: N,
    clock: C,
    poll_interval: Duration,
}

impl<N: Notifier, C: Clock> Dispatcher<N, C> {
    pub fn new(book: AlarmBook, notifier: N, clock: C, poll_interval: Duration) -> Self {
        Dispatcher {
            book,
            notifier,
            clock,
            poll_interval,
        }
    }

    /// Fire every due alarm once. Returns how many fired.
    pub fn fire_due(&self) -> AgendaResult<usize> {
        let due = self.book.take_due(self.clock.now())?;

        for alarm in &due {
            info!(event_id = alarm.event_id, label = %alarm.label, "reminder fired");
            self.notifier.notify(alarm);
        }

        Ok(due.len())
    }

    /// How long to sleep before the next pass.
    fn next_wait(&self) -> AgendaResult<Duration> {
        let Some(next) = self.book.next_trigger()? else {
            return Ok(self.poll_interval);
        };

        let until_next = (next - self.clock.now()).to_std().unwrap_or(Duration::ZERO);
        Ok(until_next.min(self.poll_interval))
    }

    /// Run until `shutdown` resolves.
    pub async fn run_until<F: Future<Output = ()>>(&self, shutdown: F) {
        tokio::pin!(shutdown);

        loop {
            let wait = match self.fire_due().and_then(|_| self.next_wait()) {
                Ok(wait) => wait,
                Err(e) => {
                    warn!(error = %e, "could not read alarms, retrying");
                    self.poll_interval
                }
            };

            debug!(?wait, "dispatcher sleeping");

            tokio::select! {
                _ = &mut shutdown => return,
                _ = tokio::time::sleep(wait) => {}
            }
        }
    }
}
