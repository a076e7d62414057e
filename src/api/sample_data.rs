use chrono::{Days, NaiveDate};

use crate::error::{TimelineError, TimelineResult};

use super::{WorkCenter, WorkOrder, WorkOrderStatus};

const WORK_CENTERS: [(&str, &str); 5] = [
    ("wc-001", "Genesis Hardware"),
    ("wc-002", "Rodrigues Electrics"),
    ("wc-003", "Konsulting Inc"),
    ("wc-004", "McMarrow Distribution"),
    ("wc-005", "Spartan Manufacturing"),
];

/// (id, name, work center, status, start offset days, end offset days)
const WORK_ORDERS: [(&str, &str, &str, WorkOrderStatus, i64, i64); 9] = [
    ("wo-001", "Centrix Ltd", "wc-001", WorkOrderStatus::Complete, -45, -15),
    ("wo-002", "Rodrigues Electrics", "wc-002", WorkOrderStatus::InProgress, -20, 25),
    ("wo-003", "Konsulting Inc", "wc-003", WorkOrderStatus::InProgress, -10, 20),
    ("wo-004", "Complex Systems", "wc-003", WorkOrderStatus::InProgress, 25, 60),
    ("wo-005", "McMarrow Distribution", "wc-004", WorkOrderStatus::Blocked, -5, 35),
    ("wo-006", "Apex Dynamics", "wc-001", WorkOrderStatus::Open, 10, 30),
    ("wo-007", "Titan Forge", "wc-005", WorkOrderStatus::Complete, -60, -35),
    ("wo-008", "Nova Assembly", "wc-005", WorkOrderStatus::Open, 5, 40),
    ("wo-009", "Summit Logistics", "wc-004", WorkOrderStatus::Open, 40, 55),
];

/// Demo board laid out around `reference`. No two orders on one work center overlap.
pub fn sample_board(reference: NaiveDate) -> TimelineResult<(Vec<WorkCenter>, Vec<WorkOrder>)> {
    let centers = WORK_CENTERS
        .iter()
        .map(|(id, name)| WorkCenter::new(*id, *name))
        .collect();

    let orders = WORK_ORDERS
        .iter()
        .map(|(id, name, center, status, start, end)| -> TimelineResult<WorkOrder> {
            Ok(WorkOrder {
                id: (*id).to_owned(),
                work_center_id: (*center).to_owned(),
                name: (*name).to_owned(),
                status: *status,
                start_date: offset(reference, *start)?,
                end_date: offset(reference, *end)?,
            })
        })
        .collect::<TimelineResult<Vec<_>>>()?;

    Ok((centers, orders))
}

fn offset(reference: NaiveDate, days: i64) -> TimelineResult<NaiveDate> {
    let shifted = if days >= 0 {
        reference.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        reference.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| {
        TimelineError::DateOutOfRange(format!("sample date {reference} {days:+} days"))
    })
}
