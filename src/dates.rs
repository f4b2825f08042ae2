// src/dates.rs

//! Day and week boundaries in an arbitrary `chrono` time zone.
//!
//! "Start" is local midnight of the day (or of the first day of the week);
//! "end" is one millisecond before the next start. When local midnight does
//! not exist (a DST gap) the first valid instant after it is used; when it is
//! ambiguous the earlier instant wins.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc, Weekday};

/// Weeks start on Monday unless stated otherwise.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Mon;

pub fn start_of_date<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&date.timezone(), date.date_naive())
}

pub fn end_of_date<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    let next_day = next_day(date.date_naive(), 1);
    local_midnight(&date.timezone(), next_day) - TimeDelta::milliseconds(1)
}

/// Midnight of the most recent `week_start` on or before `date`.
pub fn start_of_week<Tz: TimeZone>(date: &DateTime<Tz>, week_start: Weekday) -> DateTime<Tz> {
    let day = date.date_naive();
    local_midnight(&date.timezone(), first_day_of_week(day, week_start))
}

/// One millisecond before the next `week_start` strictly after `date`'s day.
pub fn end_of_week<Tz: TimeZone>(date: &DateTime<Tz>, week_start: Weekday) -> DateTime<Tz> {
    let first = first_day_of_week(date.date_naive(), week_start);
    local_midnight(&date.timezone(), next_day(first, 7)) - TimeDelta::milliseconds(1)
}

pub fn start_of_today<Tz: TimeZone>(tz: &Tz) -> DateTime<Tz> {
    start_of_date(&now_in(tz))
}

pub fn end_of_today<Tz: TimeZone>(tz: &Tz) -> DateTime<Tz> {
    end_of_date(&now_in(tz))
}

pub fn start_of_week_current<Tz: TimeZone>(tz: &Tz, week_start: Weekday) -> DateTime<Tz> {
    start_of_week(&now_in(tz), week_start)
}

pub fn end_of_week_current<Tz: TimeZone>(tz: &Tz, week_start: Weekday) -> DateTime<Tz> {
    end_of_week(&now_in(tz), week_start)
}

fn now_in<Tz: TimeZone>(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

fn first_day_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (day.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    day.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(NaiveDate::MIN)
}

fn next_day(day: NaiveDate, days: u64) -> NaiveDate {
    day.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Tz> {
    let midnight = day.and_time(NaiveTime::MIN);

    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return dt;
    }

    // DST gap: probe forward in 15 minute steps.
    (1..=16)
        .find_map(|step| {
            let probe = midnight + TimeDelta::minutes(15 * step);
            tz.from_local_datetime(&probe).earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}
