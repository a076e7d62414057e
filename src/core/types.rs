use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Zoom level of the timeline. Controls bucket size, window radius and column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoomLevel {
    Hour,
    Day,
    Week,
    #[default]
    Month,
}

impl ZoomLevel {
    pub const ALL: [ZoomLevel; 4] = [Self::Hour, Self::Day, Self::Week, Self::Month];

    /// Lenient name lookup. Unknown names fall back to `Month` so a view
    /// always has something renderable.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::debug!(requested = name, "unknown zoom level, falling back to Month");
                Self::Month
            })
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }

    #[must_use]
    pub const fn column_width_px(self) -> f64 {
        match self {
            Self::Hour => 60.0,
            Self::Day => 80.0,
            Self::Week => 120.0,
            Self::Month => 160.0,
        }
    }

    /// Number of buckets generated on each side of the reference date.
    #[must_use]
    pub const fn window_radius(self) -> u32 {
        match self {
            Self::Hour => 12,
            Self::Day => 30,
            Self::Week => 12,
            Self::Month => 8,
        }
    }
}

/// One bucket of the timeline, covering `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeColumn {
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeColumn {
    #[must_use]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.start && time < self.end
    }
}

/// Generated set of contiguous columns plus the bounds used for date/pixel mapping.
///
/// `window_start`/`window_end` are the bounds the position mapper interpolates
/// over. For every level except `Week` they coincide with the column coverage
/// at the start; week columns are Monday-aligned and may begin before
/// `window_start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimelineWindowParts")]
pub struct TimelineWindow {
    level: ZoomLevel,
    columns: Vec<TimeColumn>,
    column_width_px: f64,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
}

/// Unchecked wire shape of [`TimelineWindow`]; deserialization re-runs
/// [`TimelineWindow::new`] over it.
#[derive(Deserialize)]
struct TimelineWindowParts {
    level: ZoomLevel,
    columns: Vec<TimeColumn>,
    column_width_px: f64,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
}

impl TryFrom<TimelineWindowParts> for TimelineWindow {
    type Error = TimelineError;

    fn try_from(parts: TimelineWindowParts) -> TimelineResult<Self> {
        Self::new(
            parts.level,
            parts.columns,
            parts.column_width_px,
            parts.window_start,
            parts.window_end,
        )
    }
}

impl TimelineWindow {
    /// Builds a window from explicit columns, checking the partition invariants.
    pub fn new(
        level: ZoomLevel,
        columns: Vec<TimeColumn>,
        column_width_px: f64,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> TimelineResult<Self> {
        if columns.is_empty() {
            return Err(TimelineError::InvalidData(
                "timeline window requires at least one column".to_owned(),
            ));
        }
        if !column_width_px.is_finite() || column_width_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "column width must be finite and > 0".to_owned(),
            ));
        }
        if window_start >= window_end {
            return Err(TimelineError::InvalidData(
                "window start must be before window end".to_owned(),
            ));
        }
        if let Some(column) = columns.iter().find(|column| column.start >= column.end) {
            return Err(TimelineError::InvalidData(format!(
                "column `{}` has non-positive duration",
                column.label
            )));
        }
        if let Some(pair) = columns.windows(2).find(|pair| pair[0].end != pair[1].start) {
            return Err(TimelineError::InvalidData(format!(
                "columns `{}` and `{}` are not contiguous",
                pair[0].label, pair[1].label
            )));
        }

        Ok(Self {
            level,
            columns,
            column_width_px,
            window_start,
            window_end,
        })
    }

    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    #[must_use]
    pub fn columns(&self) -> &[TimeColumn] {
        &self.columns
    }

    #[must_use]
    pub fn column_width_px(&self) -> f64 {
        self.column_width_px
    }

    #[must_use]
    pub fn window_start(&self) -> NaiveDateTime {
        self.window_start
    }

    #[must_use]
    pub fn window_end(&self) -> NaiveDateTime {
        self.window_end
    }

    /// `columns.len() * column_width_px`, the width callers pass to the mapper.
    #[must_use]
    pub fn total_width_px(&self) -> f64 {
        self.columns.len() as f64 * self.column_width_px
    }

    /// Index of the column drawn under pixel `x` (column-stepped, not interpolated).
    #[must_use]
    pub fn column_index_at(&self, x: f64) -> Option<usize> {
        if !x.is_finite() || x < 0.0 {
            return None;
        }
        let index = (x / self.column_width_px).floor() as usize;
        (index < self.columns.len()).then_some(index)
    }

    #[must_use]
    pub fn column_containing(&self, time: NaiveDateTime) -> Option<usize> {
        self.columns.iter().position(|column| column.contains(time))
    }

    /// Whether `today` falls in the column at `index`; used to highlight the header.
    #[must_use]
    pub fn is_current_column(&self, index: usize, today: NaiveDateTime) -> bool {
        self.columns
            .get(index)
            .is_some_and(|column| column.contains(today))
    }
}

/// A dated entry (work order) scheduled on one row (work center).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEntry {
    pub id: String,
    pub row_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ScheduledEntry {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        row_id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            row_id: row_id.into(),
            name: name.into(),
            start_date,
            end_date,
        }
    }
}

/// Horizontal placement of a bar inside the timeline area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_px: f64,
    pub width_px: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn new(left_px: f64, width_px: f64) -> Self {
        Self { left_px, width_px }
    }

    #[must_use]
    pub fn right_px(self) -> f64 {
        self.left_px + self.width_px
    }

    /// Closed-interval hit test: both edge pixels count as inside.
    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left_px && x <= self.right_px()
    }
}
