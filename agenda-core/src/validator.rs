//! Field and ordering checks for event input.
//!
//! Every check is pure: it returns `Ok` or the reason the input was refused,
//! and the `Display` text of [`Invalid`] is the message shown to the user.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::clock::ClockTime;

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_YEAR: i32 = 2020;
pub const MAX_YEAR: i32 = 2100;

/// Which end of the event window a clock field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Boundary::Start => write!(f, "start"),
            Boundary::End => write!(f, "end"),
        }
    }
}

/// Why input was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    #[error("Please enter a title")]
    MissingTitle,

    #[error("Title must be at least 3 characters")]
    TitleTooShort,

    #[error("Missing date")]
    MissingDate,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Invalid year {0}")]
    Year(i32),

    #[error("Invalid month {0}")]
    Month(i32),

    #[error("Invalid day {0}")]
    Day(i32),

    #[error("Please choose the {0} time")]
    UnsetClock(Boundary),

    #[error("Invalid {0} time {1}")]
    ClockOutOfRange(Boundary, ClockTime),

    #[error("End time must be after start time")]
    EndNotAfterStart,

    #[error("Start time has already passed")]
    StartInPast,
}

pub fn validate_title(title: &str) -> Result<(), Invalid> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Invalid::MissingTitle);
    }
    if trimmed.chars().count() < MIN_TITLE_LEN {
        return Err(Invalid::TitleTooShort);
    }
    Ok(())
}

/// Check a `YYYY-MM-DD` tag field by field.
///
/// Days 1-31 are accepted for every month; whether the day exists in that
/// month is only discovered when the tag is converted to a date.
pub fn validate_date_tag(tag: &str) -> Result<(), Invalid> {
    if tag.is_empty() {
        return Err(Invalid::MissingDate);
    }

    let parts: Vec<&str> = tag.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(Invalid::MalformedDate(tag.to_string()));
    };

    let parse = |part: &str| {
        part.parse::<i32>()
            .map_err(|_| Invalid::MalformedDate(tag.to_string()))
    };
    let (year, month, day) = (parse(year)?, parse(month)?, parse(day)?);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Invalid::Year(year));
    }
    if !(1..=12).contains(&month) {
        return Err(Invalid::Month(month));
    }
    if !(1..=31).contains(&day) {
        return Err(Invalid::Day(day));
    }

    Ok(())
}

/// A clock field must be picked and lie on a 24-hour clock.
pub fn validate_clock_field(
    field: Option<ClockTime>,
    boundary: Boundary,
) -> Result<ClockTime, Invalid> {
    let time = field.ok_or(Invalid::UnsetClock(boundary))?;
    if !time.is_in_range() {
        return Err(Invalid::ClockOutOfRange(boundary, time));
    }
    Ok(time)
}

pub fn validate_clock_ordering(start: ClockTime, end: ClockTime) -> Result<(), Invalid> {
    if end <= start {
        return Err(Invalid::EndNotAfterStart);
    }
    Ok(())
}

pub fn validate_instant_ordering(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), Invalid> {
    if end <= start {
        return Err(Invalid::EndNotAfterStart);
    }
    Ok(())
}

pub fn validate_not_past(instant: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), Invalid> {
    if instant <= now {
        return Err(Invalid::StartInPast);
    }
    Ok(())
}
