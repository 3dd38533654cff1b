//! The time-slot calculator: half-hour rows, day columns, and the lookup that
//! decides whether a (day, time) cell is bookable.
//!
//! A grid cell is addressed by two timestamps: one whose local date matters
//! (the day column) and one whose local time of day matters (the time row).
//! [`merge_date_and_time`] combines them into the absolute instant the cell
//! stands for, which is compared exactly against each slot's `starts_at`.

use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone};

use crate::config::{DAYS_IN_WEEK, SLOT_MINUTES};
use crate::dst::DayStep;
use crate::error::{Result, SlotError};
use crate::timestamp::{TimeSlot, Timestamp};

/// Opening and closing hour of a business day, `opens_at < closes_at`, both in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    opens_at: u32,
    closes_at: u32,
}

impl OpeningHours {
    /// # Errors
    /// Returns `SlotError::InvalidOpeningHours` unless `opens_at < closes_at <= 23`.
    pub fn new(opens_at: u32, closes_at: u32) -> Result<Self> {
        if opens_at >= closes_at || closes_at > 23 {
            return Err(SlotError::InvalidOpeningHours {
                opens: opens_at,
                closes: closes_at,
            });
        }
        Ok(Self {
            opens_at,
            closes_at,
        })
    }

    pub fn opens_at(&self) -> u32 {
        self.opens_at
    }

    pub fn closes_at(&self) -> u32 {
        self.closes_at
    }

    /// Number of half-hour slots between opening and closing.
    pub fn slot_count(&self) -> usize {
        ((self.closes_at - self.opens_at) * 60 / SLOT_MINUTES as u32) as usize
    }
}

/// An anchor instant for `date`: local noon.
///
/// # Errors
/// Returns `SlotError::NonexistentLocalTime` if noon does not exist on that
/// date, as on days a zone skips entirely when moving across the date line.
pub fn anchor_for_date<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<Timestamp> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
    Timestamp::at_local(tz, date.and_time(noon))
}

/// Half-hour slot start times for the local calendar day of `anchor`.
///
/// The first slot is at `opens_at:00:00.000` local time; each following slot is
/// exactly 30 minutes later, the last one starting 30 minutes before
/// `closes_at`. Returns `(closes_at - opens_at) * 2` timestamps.
///
/// # Errors
/// Returns `SlotError::NonexistentLocalTime` if the opening hour falls in a DST
/// gap on that day.
pub fn daily_time_slots<Tz: TimeZone>(
    tz: &Tz,
    anchor: Timestamp,
    hours: OpeningHours,
) -> Result<Vec<Timestamp>> {
    let day = anchor.local_date(tz)?;
    let opening = day
        .and_hms_opt(hours.opens_at(), 0, 0)
        .ok_or(SlotError::InvalidOpeningHours {
            opens: hours.opens_at(),
            closes: hours.closes_at(),
        })?;
    let first = Timestamp::at_local(tz, opening)?;
    let step = TimeDelta::minutes(SLOT_MINUTES);

    Ok((0..hours.slot_count())
        .map(|i| first + step * i as i32)
        .collect())
}

/// Seven day columns starting at local midnight of `anchor`'s date, each one
/// exactly 24 hours after the previous.
///
/// Equivalent to [`weekly_date_values_with`] using [`DayStep::FixedMillis`].
pub fn weekly_date_values<Tz: TimeZone>(tz: &Tz, anchor: Timestamp) -> Result<Vec<Timestamp>> {
    weekly_date_values_with(tz, anchor, DayStep::FixedMillis)
}

/// Seven day columns starting at local midnight of `anchor`'s date, stepped
/// according to `step`.
///
/// # Errors
/// Returns `SlotError::NonexistentLocalTime` if a required local midnight falls
/// in a DST gap.
pub fn weekly_date_values_with<Tz: TimeZone>(
    tz: &Tz,
    anchor: Timestamp,
    step: DayStep,
) -> Result<Vec<Timestamp>> {
    let first_day = anchor.local_date(tz)?;

    match step {
        DayStep::FixedMillis => {
            let midnight = Timestamp::at_local(tz, first_day.and_time(NaiveTime::MIN))?;
            Ok((0..DAYS_IN_WEEK)
                .map(|i| midnight + TimeDelta::days(i as i64))
                .collect())
        }
        DayStep::CalendarDay => first_day
            .iter_days()
            .take(DAYS_IN_WEEK)
            .map(|day| Timestamp::at_local(tz, day.and_time(NaiveTime::MIN)))
            .collect(),
    }
}

/// Combine the local calendar date of `date` with the local time of day of
/// `time` (hours down to milliseconds).
///
/// Merging a result again with the same `time` yields the same result.
///
/// # Errors
/// Returns `SlotError::NonexistentLocalTime` if the combined wall-clock time
/// falls in a DST gap.
pub fn merge_date_and_time<Tz: TimeZone>(
    tz: &Tz,
    date: Timestamp,
    time: Timestamp,
) -> Result<Timestamp> {
    let day = date.local_date(tz)?;
    let time_of_day = time.local_time(tz)?;
    Timestamp::at_local(tz, day.and_time(time_of_day))
}

/// Whether the grid cell at (`date`, `time`) is one of `slots`.
///
/// True iff the merged instant equals some slot's `starts_at` exactly. A cell
/// whose wall-clock time does not exist locally matches nothing.
pub fn is_slot_available<Tz: TimeZone>(
    tz: &Tz,
    date: Timestamp,
    time: Timestamp,
    slots: &[TimeSlot],
) -> bool {
    merge_date_and_time(tz, date, time)
        .is_ok_and(|at| slots.iter().any(|slot| slot.starts_at == at))
}

/// Slots a given stylist can take. `None` means any stylist.
pub fn slots_for_stylist(slots: &[TimeSlot], stylist: Option<&str>) -> Vec<TimeSlot> {
    match stylist {
        None => slots.to_vec(),
        Some(name) => slots
            .iter()
            .filter(|slot| slot.stylists.iter().any(|s| s == name))
            .cloned()
            .collect(),
    }
}
