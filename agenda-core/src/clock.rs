//! Current time and wall-clock to instant conversion.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

/// An hour/minute pair picked on a wall clock.
///
/// Field order matters: the derived `Ord` compares hour first, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        ClockTime { hour, minute }
    }

    pub fn is_in_range(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }

    fn to_naive(self) -> AgendaResult<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .ok_or_else(|| AgendaError::DateTime(format!("'{}' is not a time of day", self)))
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        ClockTime::new(time.hour(), time.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = AgendaError;

    /// Parse `HH:MM` (single-digit hours are accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AgendaError::DateTime(format!("Invalid time '{}'. Expected HH:MM", s));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;

        Ok(ClockTime::new(hour, minute))
    }
}

/// Source of "now" and of local wall-clock conversion.
///
/// Injected into the lifecycle so that temporal checks are deterministic
/// under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Combine a calendar date and a wall-clock time into an instant.
    /// Seconds and sub-seconds are always zero.
    fn combine(&self, date: NaiveDate, time: ClockTime) -> AgendaResult<DateTime<Utc>>;

    fn parse_date_tag(&self, tag: &str) -> AgendaResult<NaiveDate> {
        parse_date_tag(tag)
    }
}

/// Parse a `YYYY-MM-DD` date tag into a calendar date.
///
/// Unlike the validator, this rejects days that do not exist in the month.
pub fn parse_date_tag(tag: &str) -> AgendaResult<NaiveDate> {
    let invalid = || AgendaError::DateTime(format!("Invalid date '{}'. Expected YYYY-MM-DD", tag));

    let parts: Vec<&str> = tag.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AgendaError::DateTime(format!("{} does not exist in the calendar", tag)))
}

/// The host clock, converting wall-clock times in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn combine(&self, date: NaiveDate, time: ClockTime) -> AgendaResult<DateTime<Utc>> {
        let naive = NaiveDateTime::new(date, time.to_naive()?);

        // Ambiguous times (DST fall-back) resolve to the first occurrence
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                AgendaError::DateTime(format!("{} does not exist in the local time zone", naive))
            })
    }
}

/// A clock that only moves when told to, with a fixed UTC offset.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    offset: FixedOffset,
}

impl ManualClock {
    /// A manual clock whose wall-clock time is UTC.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_offset(now, Utc.fix())
    }

    pub fn with_offset(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        ManualClock {
            now: Mutex::new(now),
            offset,
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn combine(&self, date: NaiveDate, time: ClockTime) -> AgendaResult<DateTime<Utc>> {
        let naive = NaiveDateTime::new(date, time.to_naive()?);

        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| AgendaError::DateTime(format!("{} cannot be resolved", naive)))
    }
}
