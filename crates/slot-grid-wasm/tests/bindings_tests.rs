//! Native tests for the WASM exports.
//!
//! Only success paths are exercised: building a `JsValue` error needs a wasm
//! host, so error cases are covered by the `slot-grid` tests instead.

use slot_grid_wasm::{build_week_grid, daily_time_slots, weekly_date_values};

/// 2026-03-05T12:00:00-05:00, the Thursday before New York springs forward.
const THURSDAY_NOON_NY: f64 = 1_772_730_000_000.0;
/// 2026-03-09T00:00:00-04:00, Monday midnight after the change.
const MONDAY_MIDNIGHT_EDT: i64 = 1_773_028_800_000;
/// 2026-03-09T01:00:00-04:00, where a fixed 24-hour step lands instead.
const MONDAY_ONE_AM_EDT: i64 = 1_773_032_400_000;
/// 2026-03-09T09:00:00-04:00.
const MONDAY_NINE_EDT: i64 = 1_773_061_200_000;

fn grid_json(calendar_days: bool) -> serde_json::Value {
    let slots = format!(r#"[{{"startsAt": {}}}]"#, MONDAY_NINE_EDT);
    let json = build_week_grid(
        "America/New_York",
        THURSDAY_NOON_NY,
        9,
        17,
        &slots,
        None,
        None,
        calendar_days,
    )
    .unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn week_grid_with_calendar_days_keeps_midnight_columns() {
    let grid = grid_json(true);

    assert_eq!(grid["days"][4]["label"], "Mon 09");
    assert_eq!(grid["days"][4]["date"], MONDAY_MIDNIGHT_EDT);
    assert_eq!(grid["rows"][0][4]["startsAt"], MONDAY_NINE_EDT);
    assert_eq!(grid["rows"][0][4]["available"], true);
}

#[test]
fn week_grid_with_fixed_step_drifts_after_spring_forward() {
    let grid = grid_json(false);

    assert_eq!(grid["days"][4]["date"], MONDAY_ONE_AM_EDT);
    assert_eq!(grid["rows"][0][4]["available"], true);
}

#[test]
fn week_grid_headers_match_weekly_date_values() {
    for calendar_days in [false, true] {
        let grid = grid_json(calendar_days);
        let days: Vec<i64> = serde_json::from_str(
            &weekly_date_values("America/New_York", THURSDAY_NOON_NY, calendar_days).unwrap(),
        )
        .unwrap();

        let header_dates: Vec<i64> = grid["days"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["date"].as_i64().unwrap())
            .collect();
        assert_eq!(header_dates, days);
    }
}

#[test]
fn daily_slots_as_json_millis() {
    let json = daily_time_slots("America/New_York", THURSDAY_NOON_NY, 9, 10).unwrap();

    let slots: Vec<i64> = serde_json::from_str(&json).unwrap();
    // 2026-03-05T09:00:00-05:00 and 09:30.
    assert_eq!(slots, vec![1_772_719_200_000, 1_772_721_000_000]);
}
