//! WASM bindings for slot-grid.
//!
//! Exposes the slot calculator to a JavaScript rendering layer via
//! `wasm-bindgen`. Timestamps cross the boundary as plain numbers
//! (milliseconds since the epoch, as `Date.prototype.getTime` returns), time
//! zones as IANA names, and collections as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_grid_wasm.wasm
//! ```

use chrono_tz::Tz;
use serde::Serialize;
use slot_grid::{DayStep, OpeningHours, SlotError, TimeSlot, Timestamp};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Boundary helpers
// ---------------------------------------------------------------------------

fn js_error(e: SlotError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_timezone(name: &str) -> Result<Tz, JsValue> {
    name.parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid timezone: {}", name)))
}

/// JavaScript numbers are doubles; reject anything that is not a whole,
/// finite millisecond count.
fn timestamp(millis: f64) -> Result<Timestamp, JsValue> {
    if !millis.is_finite() || millis.fract() != 0.0 {
        return Err(JsValue::from_str(&format!("Invalid timestamp: {}", millis)));
    }
    Ok(Timestamp::from_millis(millis as i64))
}

fn day_step(calendar_days: bool) -> DayStep {
    if calendar_days {
        DayStep::CalendarDay
    } else {
        DayStep::FixedMillis
    }
}

fn parse_slots_json(json: &str) -> Result<Vec<TimeSlot>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid slots JSON: {}", e)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Half-hour slot start times for the day of `anchor`.
///
/// Returns a JSON array of millisecond timestamps.
#[wasm_bindgen(js_name = "dailyTimeSlots")]
pub fn daily_time_slots(
    timezone: &str,
    anchor: f64,
    opens_at_hour: u32,
    closes_at_hour: u32,
) -> Result<String, JsValue> {
    let tz = parse_timezone(timezone)?;
    let hours = OpeningHours::new(opens_at_hour, closes_at_hour).map_err(js_error)?;
    let slots = slot_grid::daily_time_slots(&tz, timestamp(anchor)?, hours).map_err(js_error)?;
    to_json(&slots)
}

/// Seven local midnights starting at the day of `anchor`.
///
/// `calendar_days` steps by calendar day instead of a fixed 24 hours. Returns
/// a JSON array of millisecond timestamps.
#[wasm_bindgen(js_name = "weeklyDateValues")]
pub fn weekly_date_values(
    timezone: &str,
    anchor: f64,
    calendar_days: bool,
) -> Result<String, JsValue> {
    let tz = parse_timezone(timezone)?;
    let step = day_step(calendar_days);
    let days =
        slot_grid::weekly_date_values_with(&tz, timestamp(anchor)?, step).map_err(js_error)?;
    to_json(&days)
}

/// `HH:MM` label for a timestamp.
#[wasm_bindgen(js_name = "toTimeValue")]
pub fn to_time_value(timezone: &str, at: f64) -> Result<String, JsValue> {
    let tz = parse_timezone(timezone)?;
    slot_grid::to_time_value(&tz, timestamp(at)?).map_err(js_error)
}

/// `Sat 01` label for a timestamp.
#[wasm_bindgen(js_name = "toShortDate")]
pub fn to_short_date(timezone: &str, at: f64) -> Result<String, JsValue> {
    let tz = parse_timezone(timezone)?;
    slot_grid::to_short_date(&tz, timestamp(at)?).map_err(js_error)
}

/// The instant at `date`'s calendar day and `time`'s time of day.
#[wasm_bindgen(js_name = "mergeDateAndTime")]
pub fn merge_date_and_time(timezone: &str, date: f64, time: f64) -> Result<f64, JsValue> {
    let tz = parse_timezone(timezone)?;
    let merged = slot_grid::merge_date_and_time(&tz, timestamp(date)?, timestamp(time)?)
        .map_err(js_error)?;
    Ok(merged.as_millis() as f64)
}

/// Whether the (`date`, `time`) cell is one of the slots in `slots_json`, a
/// JSON array of `{startsAt, stylists?}` objects.
#[wasm_bindgen(js_name = "isSlotAvailable")]
pub fn is_slot_available(
    timezone: &str,
    date: f64,
    time: f64,
    slots_json: &str,
) -> Result<bool, JsValue> {
    let tz = parse_timezone(timezone)?;
    let slots = parse_slots_json(slots_json)?;
    Ok(slot_grid::is_slot_available(
        &tz,
        timestamp(date)?,
        timestamp(time)?,
        &slots,
    ))
}

/// The full week grid as JSON: `{days, times, rows}` where each cell is
/// `{startsAt, available, selected}`.
///
/// `stylist` narrows the slots to those the stylist can take; `selected` is the
/// currently chosen slot start, if any. `calendar_days` steps day columns by
/// calendar day instead of a fixed 24 hours, as in `weeklyDateValues`.
#[wasm_bindgen(js_name = "buildWeekGrid")]
pub fn build_week_grid(
    timezone: &str,
    anchor: f64,
    opens_at_hour: u32,
    closes_at_hour: u32,
    slots_json: &str,
    stylist: Option<String>,
    selected: Option<f64>,
    calendar_days: bool,
) -> Result<String, JsValue> {
    let tz = parse_timezone(timezone)?;
    let hours = OpeningHours::new(opens_at_hour, closes_at_hour).map_err(js_error)?;
    let slots = slot_grid::slots_for_stylist(&parse_slots_json(slots_json)?, stylist.as_deref());
    let selected = selected.map(timestamp).transpose()?;

    let grid = slot_grid::build_week_grid_with(
        &tz,
        timestamp(anchor)?,
        hours,
        day_step(calendar_days),
        &slots,
        selected,
    )
    .map_err(js_error)?;
    to_json(&grid)
}
