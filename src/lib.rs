//! timeline-rs: coordinate engine for work-order scheduling timelines.
//!
//! Rows (work centers) host bars (work orders) on a zoomable date axis. The
//! crate generates the date columns for a zoom level, maps dates to pixels
//! and back, sizes bars, detects scheduling overlaps and answers the
//! hover-button geometry questions a board view asks on pointer moves.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
