pub mod columns;
pub mod overlap;
pub mod positioning;
pub mod primitives;
pub mod types;

pub use columns::{generate_columns, generate_columns_by_name};
pub use overlap::{ConflictInfo, check_overlap, check_overlap_iso, ranges_overlap};
pub use positioning::{
    MIN_BAR_WIDTH_PX, ProjectedBar, bar_geometry, bar_geometry_for_range, date_to_position,
    datetime_to_position, is_date_in_range, position_to_date, project_bars,
    scroll_offset_to_center, today_position_px,
};
pub use types::{BarGeometry, ScheduledEntry, TimeColumn, TimelineWindow, ZoomLevel};
