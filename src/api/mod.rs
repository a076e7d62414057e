mod engine;
mod engine_config;
mod sample_data;
mod schedule_board;

pub use engine::{HoverDecision, HoverProbe, TimelineEngine};
pub use engine_config::TimelineEngineConfig;
pub use sample_data::sample_board;
pub use schedule_board::{
    KeyValueStore, MemoryStore, ScheduleBoard, WORK_CENTERS_KEY, WORK_ORDERS_KEY, WorkCenter,
    WorkOrder, WorkOrderDraft, WorkOrderStatus,
};
