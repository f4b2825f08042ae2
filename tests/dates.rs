// tests/dates.rs

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, TimeZone, Timelike, Utc, Weekday};
use supportkit::dates::{
    DEFAULT_WEEK_START, end_of_date, end_of_today, end_of_week, end_of_week_current,
    start_of_date, start_of_today, start_of_week, start_of_week_current,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 7).unwrap()
}

#[test]
fn test_start_of_date_is_midnight() {
    let start = start_of_date(&at(2024, 3, 14, 15, 9));

    assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap());
    // One millisecond earlier is a different day.
    assert_ne!((start - TimeDelta::milliseconds(1)).day(), start.day());
}

#[test]
fn test_end_of_date_is_last_millisecond() {
    let end = end_of_date(&at(2024, 2, 28, 1, 2));

    assert_eq!(end.day(), 28);
    assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
    assert_eq!(end.timestamp_subsec_millis(), 999);
    // Leap year: the next millisecond is Feb 29.
    assert_eq!((end + TimeDelta::milliseconds(1)).day(), 29);
}

#[test]
fn test_week_boundaries_default_monday() {
    // 2024-03-14 is a Thursday.
    let date = at(2024, 3, 14, 12, 0);

    let start = start_of_week(&date, DEFAULT_WEEK_START);
    let end = end_of_week(&date, DEFAULT_WEEK_START);

    assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
    assert_eq!(start.weekday(), Weekday::Mon);
    assert_eq!(
        end + TimeDelta::milliseconds(1),
        Utc.with_ymd_and_hms(2024, 3, 18, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_week_start_day_itself() {
    // A Monday maps to itself and its week ends the following Sunday.
    let monday = at(2024, 3, 11, 8, 30);

    assert_eq!(start_of_week(&monday, Weekday::Mon).day(), 11);
    assert_eq!(end_of_week(&monday, Weekday::Mon).day(), 17);
}

#[test]
fn test_custom_week_start_sunday() {
    let date = at(2024, 3, 14, 12, 0);

    let start = start_of_week(&date, Weekday::Sun);
    let end = end_of_week(&date, Weekday::Sun);

    assert_eq!(start.weekday(), Weekday::Sun);
    assert_eq!(start.day(), 10);
    assert_eq!(end.weekday(), Weekday::Sat);
    assert_eq!(end.day(), 16);
}

#[test]
fn test_boundaries_respect_time_zone() {
    let tz = FixedOffset::east_opt(5 * 3600).unwrap();
    // 22:00 UTC on the 14th is already the 15th at +05:00.
    let date = at(2024, 3, 14, 22, 0).with_timezone(&tz);

    let start = start_of_date(&date);
    assert_eq!(start.day(), 15);
    assert_eq!(start.hour(), 0);
    assert_eq!(start.offset(), &tz);
}

#[test]
fn test_current_week_and_day() {
    let start_week = start_of_week_current(&Utc, DEFAULT_WEEK_START);
    let end_week = end_of_week_current(&Utc, DEFAULT_WEEK_START);
    assert!(end_week > start_week);

    let start_next_week = start_of_week(&(Utc::now() + TimeDelta::weeks(1)), DEFAULT_WEEK_START);
    assert!(start_next_week > end_week);

    let start_day = start_of_today(&Utc);
    let end_day = end_of_today(&Utc);
    assert!(start_day <= Utc::now());
    assert_ne!((end_day + TimeDelta::milliseconds(1)).day(), end_day.day());
    assert!(start_week <= start_day);
}
