//! Column generation for each zoom level.
//!
//! A window is always regenerated wholesale around a reference date that is
//! first truncated to local midnight.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::core::primitives::{first_of_month, local_now, midnight, start_of_day};
use crate::core::{TimeColumn, TimelineWindow, ZoomLevel};
use crate::error::{TimelineError, TimelineResult};

/// Generates the columns for `level` centered on `reference`.
pub fn generate_columns(
    level: ZoomLevel,
    reference: NaiveDateTime,
) -> TimelineResult<TimelineWindow> {
    let reference = start_of_day(reference);
    let window = match level {
        ZoomLevel::Hour => hour_window(reference),
        ZoomLevel::Day => day_window(reference),
        ZoomLevel::Week => week_window(reference),
        ZoomLevel::Month => month_window(reference),
    }?;

    debug!(
        level = level.name(),
        reference = %reference,
        column_count = window.columns().len(),
        window_start = %window.window_start(),
        window_end = %window.window_end(),
        "generated timeline window"
    );
    Ok(window)
}

/// Name-based entry point used by views holding the zoom level as text.
///
/// Unknown names degrade to `Month`; a missing reference means "now".
pub fn generate_columns_by_name(
    level: &str,
    reference: Option<NaiveDateTime>,
) -> TimelineResult<TimelineWindow> {
    generate_columns(
        ZoomLevel::from_name(level),
        reference.unwrap_or_else(local_now),
    )
}

fn hour_window(reference: NaiveDateTime) -> TimelineResult<TimelineWindow> {
    let radius = TimeDelta::hours(i64::from(ZoomLevel::Hour.window_radius()));
    let start = reference
        .checked_sub_signed(radius)
        .ok_or_else(|| out_of_range(reference))?;
    let end = reference
        .checked_add_signed(radius)
        .ok_or_else(|| out_of_range(reference))?;

    let columns = step_columns(
        start,
        end,
        |cursor| cursor.checked_add_signed(TimeDelta::hours(1)),
        |cursor| cursor.format("%-I:%M %p").to_string(),
    )?;
    TimelineWindow::new(
        ZoomLevel::Hour,
        columns,
        ZoomLevel::Hour.column_width_px(),
        start,
        end,
    )
}

fn day_window(reference: NaiveDateTime) -> TimelineResult<TimelineWindow> {
    let radius = Days::new(u64::from(ZoomLevel::Day.window_radius()));
    let start = reference
        .checked_sub_days(radius)
        .ok_or_else(|| out_of_range(reference))?;
    let end = reference
        .checked_add_days(radius)
        .ok_or_else(|| out_of_range(reference))?;

    let columns = step_columns(
        start,
        end,
        |cursor| cursor.checked_add_days(Days::new(1)),
        |cursor| cursor.format("%b %-d").to_string(),
    )?;
    TimelineWindow::new(
        ZoomLevel::Day,
        columns,
        ZoomLevel::Day.column_width_px(),
        start,
        end,
    )
}

/// Reported bounds run Sunday to Saturday; generation starts on the Monday on
/// or before the reported start, so the first column can precede it.
fn week_window(reference: NaiveDateTime) -> TimelineResult<TimelineWindow> {
    let date = reference.date();
    let radius_days = u64::from(ZoomLevel::Week.window_radius()) * 7;
    let from_sunday = u64::from(date.weekday().num_days_from_sunday());

    let start = date
        .checked_sub_days(Days::new(from_sunday + radius_days))
        .ok_or_else(|| out_of_range(reference))?;
    let end = date
        .checked_add_days(Days::new(6 - from_sunday + radius_days))
        .ok_or_else(|| out_of_range(reference))?;
    let aligned = monday_on_or_before(start).ok_or_else(|| out_of_range(reference))?;

    let columns = step_columns(
        midnight(aligned),
        midnight(end),
        |cursor| cursor.checked_add_days(Days::new(7)),
        week_label,
    )?;
    TimelineWindow::new(
        ZoomLevel::Week,
        columns,
        ZoomLevel::Week.column_width_px(),
        midnight(start),
        midnight(end),
    )
}

/// Window runs from the 1st of (reference - radius) to the last day of
/// (reference + radius), both at midnight.
fn month_window(reference: NaiveDateTime) -> TimelineResult<TimelineWindow> {
    let radius = Months::new(ZoomLevel::Month.window_radius());
    let anchor = first_of_month(reference.date());

    let start = anchor
        .checked_sub_months(radius)
        .ok_or_else(|| out_of_range(reference))?;
    let end = anchor
        .checked_add_months(Months::new(ZoomLevel::Month.window_radius() + 1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .ok_or_else(|| out_of_range(reference))?;

    let columns = step_columns(
        midnight(start),
        midnight(end),
        |cursor| cursor.checked_add_months(Months::new(1)),
        |cursor| cursor.format("%b %Y").to_string(),
    )?;
    TimelineWindow::new(
        ZoomLevel::Month,
        columns,
        ZoomLevel::Month.column_width_px(),
        midnight(start),
        midnight(end),
    )
}

/// Emits one column per step while the cursor has not passed `window_end`.
fn step_columns(
    generation_start: NaiveDateTime,
    window_end: NaiveDateTime,
    step: impl Fn(NaiveDateTime) -> Option<NaiveDateTime>,
    label: impl Fn(NaiveDateTime) -> String,
) -> TimelineResult<Vec<TimeColumn>> {
    let mut columns = Vec::new();
    let mut cursor = generation_start;
    while cursor <= window_end {
        let next = step(cursor).ok_or_else(|| out_of_range(cursor))?;
        columns.push(TimeColumn {
            label: label(cursor),
            start: cursor,
            end: next,
        });
        cursor = next;
    }
    Ok(columns)
}

fn week_label(start: NaiveDateTime) -> String {
    let last_day = start.date().checked_add_days(Days::new(6)).unwrap_or(start.date());
    format!("{} - {}", start.format("%b %-d"), last_day.format("%-d"))
}

fn monday_on_or_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(
        date.weekday().num_days_from_monday(),
    )))
}

fn out_of_range(reference: NaiveDateTime) -> TimelineError {
    TimelineError::DateOutOfRange(format!(
        "timeline window around {reference} leaves the supported calendar range"
    ))
}
