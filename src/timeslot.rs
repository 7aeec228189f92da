//! Time-of-day handling for schedule slots
//!
//! Schedule merging and ordering key on a numeric minutes-since-midnight
//! value instead of raw `HH:MM` strings, so non-zero-padded input from
//! upstream sources cannot silently misorder a schedule.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a clock time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
    #[error("Hour out of range: {0}")]
    HourOutOfRange(u32),
    #[error("Minute out of range: {0}")]
    MinuteOutOfRange(u32),
}

/// A clock time within a single day, stored as minutes since midnight.
///
/// Ordering is numeric, and `Display` always renders zero-padded `HH:MM`,
/// so a `TimeSlot` round-trips through its string form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u16);

impl TimeSlot {
    /// Midnight, the fallback slot for unparseable upstream times
    pub const MIDNIGHT: TimeSlot = TimeSlot(0);

    /// Build a slot from hour and minute, clamping out-of-range components
    /// to the last valid value of the day
    pub fn new(hour: u16, minute: u16) -> Self {
        TimeSlot(hour.min(23) * 60 + minute.min(59))
    }

    /// Parse a `HH:MM` clock time.
    ///
    /// Accepts non-zero-padded hours (`"7:00"` parses as `07:00`) but
    /// rejects anything that is not an `H:MM`/`HH:MM` time of day.
    pub fn from_hhmm(value: &str) -> Result<Self, TimeSlotError> {
        let (hours, minutes) = value
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeSlotError::InvalidFormat(value.to_string()))?;

        let hour: u32 = hours
            .parse()
            .map_err(|_| TimeSlotError::InvalidFormat(value.to_string()))?;
        let minute: u32 = minutes
            .parse()
            .map_err(|_| TimeSlotError::InvalidFormat(value.to_string()))?;

        if hour > 23 {
            return Err(TimeSlotError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeSlotError::MinuteOutOfRange(minute));
        }

        Ok(TimeSlot((hour * 60 + minute) as u16))
    }

    /// Parse a `HH:MM` clock time, falling back to midnight on malformed
    /// input.
    ///
    /// Used at the AI payload boundary, where missing or malformed fields
    /// degrade to defaults instead of failing the whole schedule.
    pub fn from_hhmm_lossy(value: &str) -> Self {
        Self::from_hhmm(value).unwrap_or(TimeSlot::MIDNIGHT)
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Minutes elapsed since midnight
    pub fn minutes_from_midnight(&self) -> u16 {
        self.0
    }

    /// Convert to a chrono `NaiveTime`
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::from_hhmm(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
