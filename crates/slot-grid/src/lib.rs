//! # slot-grid
//!
//! Time-slot grid computation for an appointment booking view.
//!
//! A booking screen shows seven day columns starting at an anchor date and one
//! row per half hour the salon is open. Each cell is offered for selection only
//! if its instant matches one of the externally supplied available slots. All
//! functions here are pure: the anchor date and time zone are always passed in,
//! the system clock is never consulted.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use chrono_tz::Tz;
//! use slot_grid::{anchor_for_date, daily_time_slots, to_time_value, OpeningHours};
//!
//! let tz: Tz = "Europe/London".parse().unwrap();
//! let day = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
//! let anchor = anchor_for_date(&tz, day).unwrap();
//!
//! let slots = daily_time_slots(&tz, anchor, OpeningHours::new(9, 11).unwrap()).unwrap();
//! assert_eq!(slots.len(), 4);
//! assert_eq!(to_time_value(&tz, slots[3]).unwrap(), "10:30");
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — daily slots, week columns, date/time merging, availability
//! - [`grid`] — the full week grid of cells for a renderer
//! - [`format`] — `HH:MM` and `Sat 01` labels
//! - [`config`] — grid configuration and default constants
//! - [`dst`] — how successive day columns are stepped
//! - [`timestamp`] — millisecond instants and slot records
//! - [`error`] — Error types

pub mod config;
pub mod dst;
pub mod error;
pub mod format;
pub mod grid;
pub mod slots;
pub mod timestamp;

pub use config::GridConfig;
pub use dst::DayStep;
pub use error::SlotError;
pub use format::{to_short_date, to_time_value};
pub use grid::{build_week_grid, build_week_grid_with, GridCell, WeekGrid};
pub use slots::{
    anchor_for_date, daily_time_slots, is_slot_available, merge_date_and_time, slots_for_stylist,
    weekly_date_values, weekly_date_values_with, OpeningHours,
};
pub use timestamp::{TimeSlot, Timestamp};
