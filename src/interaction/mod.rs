//! Pointer geometry for the timeline's hover action button.
//!
//! Every function here is pure: the caller passes the cursor, row and bar
//! geometry it measured, and nothing is retained between calls.

pub mod exclusive;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::core::BarGeometry;

pub use exclusive::ExclusiveElementRegistry;
pub use state::{
    HoverState, PanelMode, PanelState, StateCell, StateListener, SubscriptionId, TimelineUiState,
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the hover button plus the slack the cursor may drift before it hides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionBounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for InteractionBounds {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 32.0,
            margin: 8.0,
        }
    }
}

/// True when `x` is not inside any bar. Bar edges count as inside.
#[must_use]
pub fn is_over_empty_space(x: f64, bars: &[BarGeometry]) -> bool {
    !bars.iter().any(|bar| bar.contains_x(x))
}

#[must_use]
pub fn should_show_action_affordance(
    over_label_column: bool,
    over_existing_bar: bool,
    x: f64,
    bars: &[BarGeometry],
) -> bool {
    if over_label_column || over_existing_bar {
        return false;
    }
    is_over_empty_space(x, bars)
}

/// Converts a viewport-relative pointer x into a timeline-area x.
#[must_use]
pub fn client_to_timeline_x(
    client_x: f64,
    container_left: f64,
    label_column_width: f64,
    scroll_offset: f64,
) -> f64 {
    client_x - container_left - label_column_width + scroll_offset
}

/// Independent per-axis check (not Euclidean distance).
#[must_use]
pub fn is_outside_interaction_bounds(
    cursor: Point,
    anchor: Point,
    bounds: InteractionBounds,
) -> bool {
    let distance_x = (cursor.x - anchor.x).abs();
    let distance_y = (cursor.y - anchor.y).abs();
    distance_x > bounds.width / 2.0 + bounds.margin
        || distance_y > bounds.height / 2.0 + bounds.margin
}

/// Anchor follows the cursor horizontally and sits on the row's vertical center.
#[must_use]
pub fn anchor_position(cursor_x: f64, row_top: f64, row_height: f64) -> Point {
    Point::new(cursor_x, row_top + row_height / 2.0)
}
