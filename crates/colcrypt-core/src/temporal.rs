//! # Temporal Types — The smalldatetime Domain
//!
//! Defines the representable range of SQL Server `smalldatetime` and the
//! [`SmallDateTime`] value type that lives inside it.
//!
//! ## Domain
//!
//! `smalldatetime` counts whole days from the epoch date 1900-01-01 in an
//! unsigned 16-bit field, so the last representable day is 2079-06-06
//! (day 65535). The engine documents its domain as
//! `[1900-01-01 00:00:00, 2079-06-06 23:59:29]`; anything at or after
//! `2079-06-06 23:59:30` is rejected. The upper bound is a fixed constant
//! taken from the engine, not derived from the field width.
//!
//! ## Resolution
//!
//! Values are stored at minute resolution. Seconds and sub-seconds are
//! truncated toward the start of the minute, never rounded.
//!
//! Values are wall-clock (`NaiveDateTime`); the engine stores no offset.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Day zero of the days-elapsed field.
pub const SMALLDATETIME_EPOCH: NaiveDate = calendar_date(1900, 1, 1);

/// Earliest representable value (inclusive).
pub const SMALLDATETIME_MIN: NaiveDateTime = wall_clock(1900, 1, 1, 0, 0, 0);

/// Latest representable minute.
pub const SMALLDATETIME_MAX: NaiveDateTime = wall_clock(2079, 6, 6, 23, 59, 0);

/// First instant past the documented domain (exclusive bound).
pub const SMALLDATETIME_UPPER_EXCLUSIVE: NaiveDateTime = wall_clock(2079, 6, 6, 23, 59, 30);

/// Minutes in one day; the minutes field must stay below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

const fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in constant"),
    }
}

const fn wall_clock(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> NaiveDateTime {
    let time = match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(time) => time,
        None => panic!("invalid time of day in constant"),
    };
    NaiveDateTime::new(calendar_date(year, month, day), time)
}

/// Check that `value` lies in `[SMALLDATETIME_MIN, SMALLDATETIME_UPPER_EXCLUSIVE)`.
///
/// # Errors
///
/// Returns [`CodecError::OutOfRange`] when the value is earlier than
/// 1900-01-01 00:00:00 or not earlier than 2079-06-06 23:59:30.
pub fn validate_range(value: &NaiveDateTime) -> Result<(), CodecError> {
    if *value < SMALLDATETIME_MIN || *value >= SMALLDATETIME_UPPER_EXCLUSIVE {
        return Err(CodecError::OutOfRange {
            value: *value,
            min: SMALLDATETIME_MIN,
            max: SMALLDATETIME_UPPER_EXCLUSIVE,
        });
    }
    Ok(())
}

/// Range check for a nullable value. Absent values always pass.
pub fn validate_optional(value: Option<&NaiveDateTime>) -> Result<(), CodecError> {
    match value {
        Some(value) => validate_range(value),
        None => Ok(()),
    }
}

/// Parse a wall-clock date/time without applying the range check.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS` and
/// `YYYY-MM-DD HH:MM:SS.fffffff`, with either a space or `T` between date
/// and time.
pub fn parse_naive(s: &str) -> Result<NaiveDateTime, CodecError> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    let trimmed = s.trim();
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::default()))
        .map_err(|e| CodecError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        })
}

/// A value inside the smalldatetime domain, truncated to whole minutes.
///
/// # Construction
///
/// - [`SmallDateTime::new()`] — validates the range and drops seconds.
/// - [`SmallDateTime::from_parts()`] — from the two encoded fields.
/// - [`SmallDateTime::parse()`] — from text, then as `new()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDateTime", into = "NaiveDateTime")]
pub struct SmallDateTime(NaiveDateTime);

impl SmallDateTime {
    /// Validate `value` and truncate it to the start of its minute.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if `value` is outside the domain.
    pub fn new(value: NaiveDateTime) -> Result<Self, CodecError> {
        validate_range(&value)?;
        Ok(Self(truncate_to_minute(value)))
    }

    /// Rebuild a value from the days-since-epoch and minutes-since-midnight
    /// fields of the binary layout.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidTimeOfDay`] if `minutes` is 1440 or more.
    pub fn from_parts(days: u16, minutes: u16) -> Result<Self, CodecError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(CodecError::InvalidTimeOfDay(minutes));
        }
        let date = SMALLDATETIME_EPOCH
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or(CodecError::InvalidTimeOfDay(minutes))?;
        let time = NaiveTime::from_hms_opt(u32::from(minutes / 60), u32::from(minutes % 60), 0)
            .ok_or(CodecError::InvalidTimeOfDay(minutes))?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Parse text with [`parse_naive`] and construct with [`SmallDateTime::new`].
    pub fn parse(s: &str) -> Result<Self, CodecError> {
        Self::new(parse_naive(s)?)
    }

    /// Access the inner wall-clock value.
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// Whole days elapsed since 1900-01-01.
    pub fn days_since_epoch(&self) -> u16 {
        let days = (self.0.date() - SMALLDATETIME_EPOCH).num_days();
        // The range check bounds `days` to 0..=65535.
        u16::try_from(days).unwrap_or(u16::MAX)
    }

    /// Whole minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        // hour <= 23 and minute <= 59, so this stays below 1440.
        (self.0.hour() * 60 + self.0.minute()) as u16
    }
}

impl TryFrom<NaiveDateTime> for SmallDateTime {
    type Error = CodecError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SmallDateTime> for NaiveDateTime {
    fn from(value: SmallDateTime) -> Self {
        value.0
    }
}

impl std::fmt::Display for SmallDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Drop seconds and sub-seconds.
fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(dt)
}
