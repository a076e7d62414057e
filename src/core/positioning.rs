use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_epoch_millis, epoch_millis_to_date, midnight};
use crate::core::{BarGeometry, ScheduledEntry, TimelineWindow};
use crate::error::{TimelineError, TimelineResult};

/// Bars never render narrower than this, so same-day entries stay visible.
pub const MIN_BAR_WIDTH_PX: f64 = 40.0;

/// Maps a point in time to a pixel offset by linear interpolation over the
/// whole window span.
///
/// Out-of-window times extrapolate (negative or beyond `total_width_px`);
/// callers clamp for display.
#[must_use]
pub fn datetime_to_position(
    time: NaiveDateTime,
    window: &TimelineWindow,
    total_width_px: f64,
) -> f64 {
    let start = datetime_to_epoch_millis(window.window_start()) as f64;
    let end = datetime_to_epoch_millis(window.window_end()) as f64;
    let ratio = (datetime_to_epoch_millis(time) as f64 - start) / (end - start);
    ratio * total_width_px
}

/// Date-only form of [`datetime_to_position`]; the date is read at midnight.
#[must_use]
pub fn date_to_position(date: NaiveDate, window: &TimelineWindow, total_width_px: f64) -> f64 {
    datetime_to_position(midnight(date), window, total_width_px)
}

/// Inverse of [`date_to_position`], truncated to the calendar date.
///
/// Pixels outside `[0, total_width_px]` extrapolate linearly.
pub fn position_to_date(
    x: f64,
    window: &TimelineWindow,
    total_width_px: f64,
) -> TimelineResult<NaiveDate> {
    if !x.is_finite() {
        return Err(TimelineError::InvalidData("pixel must be finite".to_owned()));
    }
    if !total_width_px.is_finite() || total_width_px <= 0.0 {
        return Err(TimelineError::InvalidData(
            "total width must be finite and > 0".to_owned(),
        ));
    }

    let start = datetime_to_epoch_millis(window.window_start()) as f64;
    let end = datetime_to_epoch_millis(window.window_end()) as f64;
    let ratio = x / total_width_px;
    // Rounding to whole milliseconds absorbs float error so midnight never
    // lands a hair before itself.
    let millis = (start + ratio * (end - start)).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(TimelineError::DateOutOfRange(format!(
            "pixel {x} maps outside the representable calendar"
        )));
    }
    epoch_millis_to_date(millis as i64)
}

/// Left offset and width for a bar covering `[start, end)`.
///
/// The width is floored at [`MIN_BAR_WIDTH_PX`] without moving `left`, so a
/// short bar's right edge can extend past its real end date.
#[must_use]
pub fn bar_geometry_for_range(
    start: NaiveDate,
    end: NaiveDate,
    window: &TimelineWindow,
    total_width_px: f64,
) -> BarGeometry {
    let left = date_to_position(start, window, total_width_px);
    let right = date_to_position(end, window, total_width_px);
    BarGeometry::new(left, (right - left).max(MIN_BAR_WIDTH_PX))
}

#[must_use]
pub fn bar_geometry(
    entry: &ScheduledEntry,
    window: &TimelineWindow,
    total_width_px: f64,
) -> BarGeometry {
    bar_geometry_for_range(entry.start_date, entry.end_date, window, total_width_px)
}

/// Bar geometry tagged with the entry it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedBar {
    pub entry_id: String,
    pub row_id: String,
    pub geometry: BarGeometry,
}

/// Projects every entry onto the window, preserving input order.
#[must_use]
pub fn project_bars(
    entries: &[ScheduledEntry],
    window: &TimelineWindow,
    total_width_px: f64,
) -> Vec<ProjectedBar> {
    let project = |entry: &ScheduledEntry| ProjectedBar {
        entry_id: entry.id.clone(),
        row_id: entry.row_id.clone(),
        geometry: bar_geometry(entry, window, total_width_px),
    };

    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        entries.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        entries.iter().map(project).collect()
    }
}

/// Pixel offset of the "today" marker, including the sticky row-label column.
#[must_use]
pub fn today_position_px(
    today: NaiveDate,
    window: &TimelineWindow,
    total_width_px: f64,
    row_label_column_width_px: f64,
) -> f64 {
    row_label_column_width_px + date_to_position(today, window, total_width_px)
}

/// Horizontal scroll offset that brings the today marker to the middle of the viewport.
#[must_use]
pub fn scroll_offset_to_center(
    today_position_px: f64,
    viewport_width_px: f64,
    row_label_column_width_px: f64,
) -> f64 {
    today_position_px - viewport_width_px / 2.0 - row_label_column_width_px / 2.0
}

/// Half-open membership: `start <= time < end`.
#[must_use]
pub fn is_date_in_range(time: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    time >= start && time < end
}
