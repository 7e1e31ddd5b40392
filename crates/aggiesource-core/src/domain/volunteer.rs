//! Volunteer Shifts
//!
//! `ActiveShift` is the singleton marking a volunteer as checked in.
//! Checking out turns it into a `VolunteerLog`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::error::DomainResult;
use super::input::{lenient_timestamp, required};

/// The current check-in, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActiveShift {
    pub shift: String,
    pub event: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub start: DateTime<Utc>,
    /// `YYYY-MM-DD` (UTC) of the check-in; keys checklist progress
    pub date: String,
}

impl ActiveShift {
    /// Start a shift from the check-in form.
    pub fn begin(shift: &str, event: &str, now: DateTime<Utc>) -> DomainResult<Self> {
        const MESSAGE: &str = "Please enter both Shift and Event.";
        let shift = required(shift, MESSAGE)?;
        let event = required(event, MESSAGE)?;
        Ok(Self {
            shift: shift.to_string(),
            event: event.to_string(),
            start: now,
            date: now.format("%Y-%m-%d").to_string(),
        })
    }

    /// Close the shift at `now`.
    pub fn finish(self, now: DateTime<Utc>) -> VolunteerLog {
        VolunteerLog {
            minutes: elapsed_minutes(self.start, now),
            shift: self.shift,
            event: self.event,
            date: self.date,
            start: self.start,
            end: now,
        }
    }
}

/// A completed check-in/check-out pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VolunteerLog {
    pub shift: String,
    pub event: String,
    pub date: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub end: DateTime<Utc>,
    pub minutes: u32,
}

/// Whole minutes between two instants, rounded half up, at least 1.
pub fn elapsed_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let ms = (end - start).num_milliseconds() as f64;
    let minutes = (ms / 60_000.0 + 0.5).floor();
    if minutes < 1.0 {
        1
    } else {
        minutes.min(u32::MAX as f64) as u32
    }
}

/// Minutes as hours, rounded to one decimal
pub fn minutes_to_hours(minutes: u64) -> f64 {
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}
