//! Property-based tests for the slot calculator using proptest.
//!
//! These tests verify invariants that should hold for any anchor date, zone
//! and opening hours, not just the examples in `slots_tests.rs`.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use proptest::prelude::*;
use slot_grid::{
    daily_time_slots, is_slot_available, merge_date_and_time, weekly_date_values,
    weekly_date_values_with, DayStep, OpeningHours, TimeSlot, Timestamp,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_timezone() -> impl Strategy<Value = Tz> {
    prop_oneof![
        Just(chrono_tz::UTC),
        Just(chrono_tz::America::New_York),
        Just(chrono_tz::Europe::London),
        Just(chrono_tz::Asia::Tokyo),
        Just(chrono_tz::Australia::Sydney),
    ]
}

/// Opening hours with `opens < closes <= 23`.
fn arb_hours() -> impl Strategy<Value = (u32, u32)> {
    (0u32..23).prop_flat_map(|opens| (Just(opens), (opens + 1)..=23))
}

/// Any instant between 2000-01-01 and 2030-01-01.
fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (946_684_800_000i64..1_893_456_000_000).prop_map(Timestamp::from_millis)
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: one slot per half hour, 30 minutes apart, starting on the hour
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn daily_slots_count_and_spacing(
        tz in arb_timezone(),
        anchor in arb_timestamp(),
        (opens, closes) in arb_hours(),
    ) {
        let hours = OpeningHours::new(opens, closes).unwrap();

        // An opening hour inside a DST gap is reported, not our concern here.
        if let Ok(slots) = daily_time_slots(&tz, anchor, hours) {
            prop_assert_eq!(slots.len(), ((closes - opens) * 2) as usize);
            for pair in slots.windows(2) {
                prop_assert_eq!(pair[1].as_millis() - pair[0].as_millis(), 30 * 60 * 1000);
            }
            prop_assert_eq!(
                slots[0].local_time(&tz).unwrap(),
                NaiveTime::from_hms_opt(opens, 0, 0).unwrap()
            );
            prop_assert_eq!(slots[0].local_date(&tz).unwrap(), anchor.local_date(&tz).unwrap());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: seven columns exactly a day apart
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn week_is_seven_fixed_days(tz in arb_timezone(), anchor in arb_timestamp()) {
        if let Ok(days) = weekly_date_values(&tz, anchor) {
            prop_assert_eq!(days.len(), 7);
            prop_assert_eq!(days[0].local_date(&tz).unwrap(), anchor.local_date(&tz).unwrap());
            for pair in days.windows(2) {
                prop_assert_eq!(pair[1].as_millis() - pair[0].as_millis(), 24 * 60 * 60 * 1000);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: calendar-day columns are consecutive local midnights
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn calendar_week_lands_on_midnights(tz in arb_timezone(), anchor in arb_timestamp()) {
        if let Ok(days) = weekly_date_values_with(&tz, anchor, DayStep::CalendarDay) {
            let first: NaiveDate = anchor.local_date(&tz).unwrap();
            for (i, day) in days.iter().enumerate() {
                prop_assert_eq!(day.local_time(&tz).unwrap(), NaiveTime::MIN);
                prop_assert_eq!(
                    day.local_date(&tz).unwrap(),
                    first + chrono::Days::new(i as u64)
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: merging is idempotent and keeps date and time of day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent(
        tz in arb_timezone(),
        date in arb_timestamp(),
        time in arb_timestamp(),
    ) {
        if let Ok(merged) = merge_date_and_time(&tz, date, time) {
            prop_assert_eq!(merge_date_and_time(&tz, merged, time).unwrap(), merged);
            prop_assert_eq!(merged.local_date(&tz).unwrap(), date.local_date(&tz).unwrap());
            prop_assert_eq!(merged.local_time(&tz).unwrap(), time.local_time(&tz).unwrap());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: availability is exact membership of the merged instant
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn availability_is_exact_membership(
        tz in arb_timezone(),
        date in arb_timestamp(),
        time in arb_timestamp(),
    ) {
        prop_assert!(!is_slot_available(&tz, date, time, &[]));

        if let Ok(merged) = merge_date_and_time(&tz, date, time) {
            let exact = [TimeSlot::new(merged)];
            let near = [
                TimeSlot::new(Timestamp::from_millis(merged.as_millis() - 1)),
                TimeSlot::new(Timestamp::from_millis(merged.as_millis() + 1)),
            ];
            prop_assert!(is_slot_available(&tz, date, time, &exact));
            prop_assert!(!is_slot_available(&tz, date, time, &near));
        }
    }
}
