//! Grid configuration and its defaults.
//!
//! Defaults are plain constants; a [`GridConfig`] is built from them and
//! overridden field by field from a JSON document or command-line flags.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dst::DayStep;
use crate::error::{Result, SlotError};
use crate::slots::OpeningHours;

pub const DEFAULT_OPENS_AT_HOUR: u32 = 9;
pub const DEFAULT_CLOSES_AT_HOUR: u32 = 19;
pub const DAYS_IN_WEEK: usize = 7;
pub const SLOT_MINUTES: i64 = 30;

/// Everything needed to lay out a week grid, except the availability data.
///
/// JSON keys are camelCase and every field is optional:
///
/// ```json
/// { "opensAtHour": 10, "closesAtHour": 18, "anchor": "2018-12-01",
///   "timezone": "Europe/London", "dayStep": "calendarDay" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub opens_at_hour: u32,
    pub closes_at_hour: u32,
    /// First day of the week shown. `None` leaves the choice to the caller.
    pub anchor: Option<NaiveDate>,
    /// IANA zone name. `None` means the host's local zone.
    pub timezone: Option<String>,
    pub day_step: DayStep,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            opens_at_hour: DEFAULT_OPENS_AT_HOUR,
            closes_at_hour: DEFAULT_CLOSES_AT_HOUR,
            anchor: None,
            timezone: None,
            day_step: DayStep::default(),
        }
    }
}

impl GridConfig {
    /// # Errors
    /// Returns `SlotError::Config` if `json` is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn opening_hours(&self) -> Result<OpeningHours> {
        OpeningHours::new(self.opens_at_hour, self.closes_at_hour)
    }

    /// The configured IANA zone, or `None` for the host's local zone.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` if the name is not a known zone.
    pub fn time_zone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
            })
            .transpose()
    }
}
