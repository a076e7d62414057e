use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{TimelineError, TimelineResult};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local wall-clock time.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[must_use]
pub fn local_today() -> NaiveDate {
    local_now().date()
}

/// Truncates to local midnight.
#[must_use]
pub fn start_of_day(time: NaiveDateTime) -> NaiveDateTime {
    time.date().and_time(NaiveTime::MIN)
}

#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Wall-clock milliseconds. The naive value is read as UTC, so every calendar
/// day spans exactly [`MILLIS_PER_DAY`].
#[must_use]
pub fn datetime_to_epoch_millis(time: NaiveDateTime) -> i64 {
    time.and_utc().timestamp_millis()
}

#[must_use]
pub fn date_to_epoch_millis(date: NaiveDate) -> i64 {
    datetime_to_epoch_millis(midnight(date))
}

pub fn epoch_millis_to_date(millis: i64) -> TimelineResult<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|time| time.date_naive())
        .ok_or_else(|| {
            TimelineError::DateOutOfRange(format!("{millis} ms is not a representable date"))
        })
}

/// Parses a `YYYY-MM-DD` date-only string.
pub fn parse_iso_date(input: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|_| {
        TimelineError::InvalidDate {
            input: input.to_owned(),
        }
    })
}

/// Like [`parse_iso_date`] but yields `None` for malformed input.
#[must_use]
pub fn parse_iso_date_lenient(input: &str) -> Option<NaiveDate> {
    parse_iso_date(input).ok()
}

#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
