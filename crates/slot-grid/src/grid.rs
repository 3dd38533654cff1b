//! The week grid handed to a renderer.
//!
//! Columns are the seven days from the anchor date, rows are the half-hour
//! slot times of a business day, and each cell records the instant it stands
//! for and whether that instant is available or currently selected.

use chrono::TimeZone;
use serde::Serialize;

use crate::dst::DayStep;
use crate::error::{Result, SlotError};
use crate::format::{to_short_date, to_time_value};
use crate::slots::{daily_time_slots, merge_date_and_time, weekly_date_values_with, OpeningHours};
use crate::timestamp::{TimeSlot, Timestamp};

/// A day column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHeader {
    pub date: Timestamp,
    /// e.g. `Sat 01`
    pub label: String,
}

/// A time row header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeHeader {
    pub time: Timestamp,
    /// e.g. `09:30`
    pub label: String,
}

/// One (day, time) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// The instant this cell stands for. `None` when the wall-clock time does
    /// not exist on that day (DST gap).
    pub starts_at: Option<Timestamp>,
    pub available: bool,
    pub selected: bool,
}

/// Seven day columns by N time rows. `rows[t][d]` is the cell for time row `t`
/// on day column `d`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    pub days: Vec<DayHeader>,
    pub times: Vec<TimeHeader>,
    pub rows: Vec<Vec<GridCell>>,
}

impl WeekGrid {
    pub fn cell(&self, time_index: usize, day_index: usize) -> Option<&GridCell> {
        self.rows.get(time_index)?.get(day_index)
    }

    /// Available cells in row-major order.
    pub fn available_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten().filter(|cell| cell.available)
    }

    pub fn selected_cell(&self) -> Option<&GridCell> {
        self.rows.iter().flatten().find(|cell| cell.selected)
    }
}

/// Build the week grid starting at `anchor`, with day columns a fixed 24 hours
/// apart.
///
/// See [`build_week_grid_with`].
pub fn build_week_grid<Tz: TimeZone>(
    tz: &Tz,
    anchor: Timestamp,
    hours: OpeningHours,
    slots: &[TimeSlot],
    selected: Option<Timestamp>,
) -> Result<WeekGrid> {
    build_week_grid_with(tz, anchor, hours, DayStep::FixedMillis, slots, selected)
}

/// Build the week grid starting at `anchor`.
///
/// Row times come from the anchor's own day; each cell merges its column's
/// date with its row's time of day. A cell is available iff that instant is
/// some slot's `starts_at`, and selected iff it equals `selected`.
///
/// # Errors
/// Propagates errors from [`daily_time_slots`] and [`weekly_date_values_with`],
/// and returns `SlotError::TimestampOutOfRange` if a cell falls outside the
/// range chrono can represent. A cell in a DST gap is not an error.
pub fn build_week_grid_with<Tz: TimeZone>(
    tz: &Tz,
    anchor: Timestamp,
    hours: OpeningHours,
    step: DayStep,
    slots: &[TimeSlot],
    selected: Option<Timestamp>,
) -> Result<WeekGrid> {
    let dates = weekly_date_values_with(tz, anchor, step)?;
    let times = daily_time_slots(tz, anchor, hours)?;

    let days = dates
        .iter()
        .map(|&date| {
            Ok(DayHeader {
                date,
                label: to_short_date(tz, date)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let time_headers = times
        .iter()
        .map(|&time| {
            Ok(TimeHeader {
                time,
                label: to_time_value(tz, time)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let rows = times
        .iter()
        .map(|&time| {
            dates
                .iter()
                .map(|&date| {
                    let starts_at = match merge_date_and_time(tz, date, time) {
                        Ok(at) => Some(at),
                        Err(SlotError::NonexistentLocalTime(_)) => None,
                        Err(e) => return Err(e),
                    };
                    Ok(GridCell {
                        starts_at,
                        available: starts_at
                            .is_some_and(|at| slots.iter().any(|slot| slot.starts_at == at)),
                        selected: starts_at.is_some() && starts_at == selected,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let grid = WeekGrid {
        days,
        times: time_headers,
        rows,
    };

    tracing::debug!(
        days = grid.days.len(),
        times = grid.times.len(),
        available = grid.available_cells().count(),
        offered = slots.len(),
        "built week grid"
    );

    Ok(grid)
}
