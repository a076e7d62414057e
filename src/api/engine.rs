use chrono::NaiveDate;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::primitives::{local_now, midnight};
use crate::core::{
    BarGeometry, ProjectedBar, ScheduledEntry, TimelineWindow, ZoomLevel, bar_geometry,
    generate_columns, position_to_date, project_bars, scroll_offset_to_center, today_position_px,
};
use crate::error::TimelineResult;
use crate::interaction::{
    Point, TimelineUiState, anchor_position, client_to_timeline_x, is_outside_interaction_bounds,
    should_show_action_affordance,
};

use super::TimelineEngineConfig;

/// Pointer measurements taken by the view for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverProbe {
    pub client_x: f64,
    pub container_left: f64,
    pub scroll_offset: f64,
    pub row_top: f64,
    pub row_height: f64,
    pub over_label_column: bool,
    pub over_existing_bar: bool,
}

/// Outcome of evaluating a pointer position against a row's bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverDecision {
    Show { anchor: Point, timeline_x: f64 },
    Hide,
}

/// Timeline calculation facade used by a board view.
///
/// Owns the current window and regenerates it wholesale whenever the zoom
/// level or reference date changes. Entries are never stored here; callers
/// pass snapshots per call.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: TimelineEngineConfig,
    window: TimelineWindow,
}

impl TimelineEngine {
    pub fn new(config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let window = build_window(config)?;
        Ok(Self { config, window })
    }

    #[must_use]
    pub fn config(&self) -> &TimelineEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.config.zoom_level
    }

    #[must_use]
    pub fn window(&self) -> &TimelineWindow {
        &self.window
    }

    #[must_use]
    pub fn total_width_px(&self) -> f64 {
        self.window.total_width_px()
    }

    pub fn set_zoom_level(&mut self, level: ZoomLevel) -> TimelineResult<()> {
        let mut config = self.config;
        config.zoom_level = level;
        self.replace_config(config)
    }

    /// Applies a zoom level chosen by name; unknown names select `Month`.
    pub fn set_zoom_level_by_name(&mut self, name: &str) -> TimelineResult<ZoomLevel> {
        let level = ZoomLevel::from_name(name);
        self.set_zoom_level(level)?;
        Ok(level)
    }

    pub fn set_reference_date(&mut self, reference_date: Option<NaiveDate>) -> TimelineResult<()> {
        let mut config = self.config;
        config.reference_date = reference_date;
        self.replace_config(config)
    }

    fn replace_config(&mut self, config: TimelineEngineConfig) -> TimelineResult<()> {
        let window = build_window(config)?;
        debug!(
            level = config.zoom_level.name(),
            column_count = window.columns().len(),
            "regenerated timeline window"
        );
        self.config = config;
        self.window = window;
        Ok(())
    }

    #[must_use]
    pub fn bar_geometry(&self, entry: &ScheduledEntry) -> BarGeometry {
        bar_geometry(entry, &self.window, self.total_width_px())
    }

    #[must_use]
    pub fn project_bars(&self, entries: &[ScheduledEntry]) -> Vec<ProjectedBar> {
        project_bars(entries, &self.window, self.total_width_px())
    }

    /// Geometry of the bars on one row, in input order.
    #[must_use]
    pub fn row_bars(&self, entries: &[ScheduledEntry], row_id: &str) -> SmallVec<[BarGeometry; 8]> {
        entries
            .iter()
            .filter(|entry| entry.row_id == row_id)
            .map(|entry| self.bar_geometry(entry))
            .collect()
    }

    #[must_use]
    pub fn today_position_px(&self, today: NaiveDate) -> f64 {
        today_position_px(
            today,
            &self.window,
            self.total_width_px(),
            self.config.row_label_column_width_px,
        )
    }

    /// Scroll offset that centers the today marker in a viewport of the given width.
    #[must_use]
    pub fn scroll_to_today_offset(&self, today: NaiveDate, viewport_width_px: f64) -> f64 {
        scroll_offset_to_center(
            self.today_position_px(today),
            viewport_width_px,
            self.config.row_label_column_width_px,
        )
    }

    #[must_use]
    pub fn timeline_x(&self, client_x: f64, container_left: f64, scroll_offset: f64) -> f64 {
        client_to_timeline_x(
            client_x,
            container_left,
            self.config.row_label_column_width_px,
            scroll_offset,
        )
    }

    /// Date under a click on a row's empty space; seeds the create panel.
    pub fn click_to_date(
        &self,
        client_x: f64,
        container_left: f64,
        scroll_offset: f64,
    ) -> TimelineResult<NaiveDate> {
        let x = self.timeline_x(client_x, container_left, scroll_offset);
        position_to_date(x, &self.window, self.total_width_px())
    }

    #[must_use]
    pub fn evaluate_hover(&self, probe: &HoverProbe, bars: &[BarGeometry]) -> HoverDecision {
        let timeline_x = self.timeline_x(probe.client_x, probe.container_left, probe.scroll_offset);
        if should_show_action_affordance(
            probe.over_label_column,
            probe.over_existing_bar,
            timeline_x,
            bars,
        ) {
            HoverDecision::Show {
                anchor: anchor_position(probe.client_x, probe.row_top, probe.row_height),
                timeline_x,
            }
        } else {
            HoverDecision::Hide
        }
    }

    /// Feeds a pointer move on `row_id`, which schedules `work_center_id`,
    /// into the view state.
    ///
    /// A button already shown on the same row keeps its anchor while the
    /// pointer stays over empty space and is hidden once it reaches a bar.
    pub fn apply_row_hover(
        &self,
        ui: &mut TimelineUiState,
        row_id: &str,
        work_center_id: &str,
        probe: &HoverProbe,
        bars: &[BarGeometry],
    ) -> HoverDecision {
        let decision = self.evaluate_hover(probe, bars);
        let current = ui.current_hover_state();
        let same_row = current.row_id.as_deref() == Some(row_id);
        let button_shown = current.button_position.is_some();
        trace!(row_id, same_row, button_shown, ?decision, "row hover");

        match (same_row && button_shown, decision) {
            (true, HoverDecision::Show { .. }) => {}
            (true, HoverDecision::Hide) => ui.update_button_position(None),
            (false, HoverDecision::Show { anchor, .. }) => {
                ui.set_hover_state(row_id, work_center_id, Some(anchor));
            }
            (false, HoverDecision::Hide) => {
                ui.set_hover_state(row_id, work_center_id, None);
            }
        }
        decision
    }

    /// Whether the cursor drifted far enough from the button anchor to hide it.
    #[must_use]
    pub fn should_hide_action_button(&self, cursor: Point, anchor: Point) -> bool {
        is_outside_interaction_bounds(cursor, anchor, self.config.action_button_bounds)
    }
}

fn build_window(config: TimelineEngineConfig) -> TimelineResult<TimelineWindow> {
    let reference = config.reference_date.map_or_else(local_now, midnight);
    generate_columns(config.zoom_level, reference)
}
