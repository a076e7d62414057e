use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::ZoomLevel;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::InteractionBounds;

/// Public engine bootstrap configuration.
///
/// Serializable so a host can persist the chosen zoom level and layout
/// between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    #[serde(default)]
    pub zoom_level: ZoomLevel,
    /// `None` centers the window on the current local date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default = "default_row_label_column_width_px")]
    pub row_label_column_width_px: f64,
    #[serde(default)]
    pub action_button_bounds: InteractionBounds,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self::new(ZoomLevel::default())
    }
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(zoom_level: ZoomLevel) -> Self {
        Self {
            zoom_level,
            reference_date: None,
            row_label_column_width_px: default_row_label_column_width_px(),
            action_button_bounds: InteractionBounds::default(),
        }
    }

    #[must_use]
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }

    #[must_use]
    pub fn with_row_label_column_width_px(mut self, width_px: f64) -> Self {
        self.row_label_column_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_action_button_bounds(mut self, bounds: InteractionBounds) -> Self {
        self.action_button_bounds = bounds;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.row_label_column_width_px.is_finite() || self.row_label_column_width_px < 0.0 {
            return Err(TimelineError::InvalidData(
                "row label column width must be finite and >= 0".to_owned(),
            ));
        }
        let bounds = self.action_button_bounds;
        for (value, name) in [
            (bounds.width, "width"),
            (bounds.height, "height"),
            (bounds.margin, "margin"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "action button `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_row_label_column_width_px() -> f64 {
    380.0
}
