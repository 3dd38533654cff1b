//! Policies for stepping from one day column to the next.

use serde::{Deserialize, Serialize};

/// How successive day columns of a week are derived from the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayStep {
    /// Add exactly 24 hours of milliseconds per column. Across a DST change the
    /// later columns drift off local midnight by the size of the shift.
    #[default]
    FixedMillis,
    /// Local midnight of each successive calendar day. Consecutive columns may
    /// be 23 or 25 hours apart.
    CalendarDay,
}
