//! Millisecond instants and the slot records checked against them.
//!
//! A [`Timestamp`] is an absolute instant. Its calendar date and time of day
//! only exist relative to a time zone, so every local accessor takes one.

use std::fmt;
use std::ops::Add;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Resolve a wall-clock time in `tz` to an instant.
    ///
    /// Ambiguous times (the repeated hour when clocks fall back) resolve to the
    /// earlier instant.
    ///
    /// # Errors
    /// Returns `SlotError::NonexistentLocalTime` if `local` falls in a DST gap.
    pub fn at_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Result<Self> {
        tz.from_local_datetime(&local)
            .earliest()
            .map(Self::from)
            .ok_or(SlotError::NonexistentLocalTime(local))
    }

    /// # Errors
    /// Returns `SlotError::TimestampOutOfRange` if chrono cannot represent the instant.
    pub fn to_datetime<Tz: TimeZone>(self, tz: &Tz) -> Result<DateTime<Tz>> {
        tz.timestamp_millis_opt(self.0)
            .single()
            .ok_or(SlotError::TimestampOutOfRange(self.0))
    }

    /// Calendar date of this instant in `tz`.
    pub fn local_date<Tz: TimeZone>(self, tz: &Tz) -> Result<NaiveDate> {
        Ok(self.to_datetime(tz)?.date_naive())
    }

    /// Time of day of this instant in `tz`, down to the millisecond.
    pub fn local_time<Tz: TimeZone>(self, tz: &Tz) -> Result<NaiveTime> {
        Ok(self.to_datetime(tz)?.time())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl Add<TimeDelta> for Timestamp {
    type Output = Timestamp;

    fn add(self, delta: TimeDelta) -> Timestamp {
        Timestamp(self.0 + delta.num_milliseconds())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One bookable half-hour slot, as supplied by whoever owns appointment data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub starts_at: Timestamp,
    /// Stylists able to take this slot. Empty when the source does not say.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylists: Vec<String>,
}

impl TimeSlot {
    pub fn new(starts_at: Timestamp) -> Self {
        Self {
            starts_at,
            stylists: Vec::new(),
        }
    }

    pub fn with_stylists<I, S>(starts_at: Timestamp, stylists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            starts_at,
            stylists: stylists.into_iter().map(Into::into).collect(),
        }
    }
}
