//! Work-center / work-order store backing a board view.
//!
//! Every accepted write is overlap-checked against the same work center and
//! persisted as two JSON arrays in a [`KeyValueStore`].

use std::collections::HashMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{ScheduledEntry, check_overlap};
use crate::error::{TimelineError, TimelineResult};

use super::sample_board;

pub const WORK_CENTERS_KEY: &str = "wo_work_centers";
pub const WORK_ORDERS_KEY: &str = "wo_work_orders";

/// String key-value persistence, e.g. browser local storage or a settings file.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> TimelineResult<()>;
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> TimelineResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCenter {
    pub id: String,
    pub name: String,
}

impl WorkCenter {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    Complete,
    Blocked,
}

impl WorkOrderStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
            Self::Blocked => "Blocked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,
    pub work_center_id: String,
    pub name: String,
    pub status: WorkOrderStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WorkOrder {
    #[must_use]
    pub fn to_scheduled_entry(&self) -> ScheduledEntry {
        ScheduledEntry::new(
            self.id.clone(),
            self.work_center_id.clone(),
            self.name.clone(),
            self.start_date,
            self.end_date,
        )
    }
}

/// Editable fields of a work order, as submitted by the side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDraft {
    pub work_center_id: String,
    pub name: String,
    pub status: WorkOrderStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WorkOrderDraft {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.name.trim().is_empty() {
            return Err(TimelineError::InvalidData(
                "work order name must not be empty".to_owned(),
            ));
        }
        if self.end_date <= self.start_date {
            return Err(TimelineError::InvalidData(
                "work order end date must be after its start date".to_owned(),
            ));
        }
        Ok(())
    }

    fn into_order(self, id: String) -> WorkOrder {
        WorkOrder {
            id,
            work_center_id: self.work_center_id,
            name: self.name,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug)]
pub struct ScheduleBoard<S: KeyValueStore> {
    store: S,
    work_centers: Vec<WorkCenter>,
    work_orders: IndexMap<String, WorkOrder>,
}

impl<S: KeyValueStore> ScheduleBoard<S> {
    /// Loads both collections from `store`, seeding sample data around
    /// `reference` when either key is missing or blank.
    pub fn load(store: S, reference: NaiveDate) -> TimelineResult<Self> {
        let mut board = Self {
            store,
            work_centers: Vec::new(),
            work_orders: IndexMap::new(),
        };

        match (
            stored_value(&board.store, WORK_CENTERS_KEY),
            stored_value(&board.store, WORK_ORDERS_KEY),
        ) {
            (Some(centers), Some(orders)) => {
                board.work_centers = parse_json(WORK_CENTERS_KEY, &centers)?;
                let orders: Vec<WorkOrder> = parse_json(WORK_ORDERS_KEY, &orders)?;
                board.work_orders = index_orders(orders);
                debug!(
                    work_centers = board.work_centers.len(),
                    work_orders = board.work_orders.len(),
                    "loaded schedule board"
                );
            }
            _ => board.seed_sample_data(reference)?,
        }
        Ok(board)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn work_centers(&self) -> &[WorkCenter] {
        &self.work_centers
    }

    pub fn work_orders(&self) -> impl Iterator<Item = &WorkOrder> {
        self.work_orders.values()
    }

    #[must_use]
    pub fn work_order(&self, id: &str) -> Option<&WorkOrder> {
        self.work_orders.get(id)
    }

    #[must_use]
    pub fn orders_for_work_center(&self, work_center_id: &str) -> Vec<&WorkOrder> {
        self.work_orders
            .values()
            .filter(|order| order.work_center_id == work_center_id)
            .collect()
    }

    /// All orders as timeline entries, in insertion order.
    #[must_use]
    pub fn scheduled_entries(&self) -> Vec<ScheduledEntry> {
        self.work_orders
            .values()
            .map(WorkOrder::to_scheduled_entry)
            .collect()
    }

    /// Creates an order and returns its generated id.
    ///
    /// The board is left untouched when the store rejects the write.
    pub fn create_work_order(&mut self, draft: WorkOrderDraft) -> TimelineResult<String> {
        self.check_draft(&draft, None)?;
        let id = format!("wo-{}", Uuid::new_v4().simple());
        debug!(id = %id, work_center = %draft.work_center_id, "create work order");
        let mut orders = self.work_orders.clone();
        orders.insert(id.clone(), draft.into_order(id.clone()));
        self.commit_orders(orders)?;
        Ok(id)
    }

    pub fn update_work_order(&mut self, id: &str, draft: WorkOrderDraft) -> TimelineResult<()> {
        if !self.work_orders.contains_key(id) {
            return Err(TimelineError::NotFound {
                kind: "work order",
                id: id.to_owned(),
            });
        }
        self.check_draft(&draft, Some(id))?;
        debug!(id, work_center = %draft.work_center_id, "update work order");
        let mut orders = self.work_orders.clone();
        orders.insert(id.to_owned(), draft.into_order(id.to_owned()));
        self.commit_orders(orders)
    }

    /// Removes an order. Returns `false` when no order had that id.
    pub fn delete_work_order(&mut self, id: &str) -> TimelineResult<bool> {
        if !self.work_orders.contains_key(id) {
            return Ok(false);
        }
        debug!(id, "delete work order");
        let mut orders = self.work_orders.clone();
        orders.shift_remove(id);
        self.commit_orders(orders)?;
        Ok(true)
    }

    /// Overwrites persisted state with sample data around `reference`.
    pub fn reset_to_sample_data(&mut self, reference: NaiveDate) -> TimelineResult<()> {
        self.seed_sample_data(reference)
    }

    fn check_draft(&self, draft: &WorkOrderDraft, exclude_id: Option<&str>) -> TimelineResult<()> {
        draft.validate()?;
        if !self
            .work_centers
            .iter()
            .any(|center| center.id == draft.work_center_id)
        {
            return Err(TimelineError::NotFound {
                kind: "work center",
                id: draft.work_center_id.clone(),
            });
        }

        let existing: Vec<ScheduledEntry> = self
            .orders_for_work_center(&draft.work_center_id)
            .into_iter()
            .map(WorkOrder::to_scheduled_entry)
            .collect();
        if let Some(conflict) =
            check_overlap(&existing, draft.start_date, draft.end_date, exclude_id)
        {
            warn!(
                work_center = %draft.work_center_id,
                conflicting_id = %conflict.entry_id,
                "rejecting overlapping work order"
            );
            return Err(TimelineError::Overlap(conflict));
        }
        Ok(())
    }

    fn seed_sample_data(&mut self, reference: NaiveDate) -> TimelineResult<()> {
        let (centers, orders) = sample_board(reference)?;
        debug!(reference = %reference, "seeding sample schedule board");
        let orders = index_orders(orders);
        let centers_json = to_json(&centers)?;
        let orders_json = to_json(&orders.values().collect::<Vec<_>>())?;

        let previous_centers = self.store.get(WORK_CENTERS_KEY);
        self.store.set(WORK_CENTERS_KEY, centers_json)?;
        if let Err(err) = self.store.set(WORK_ORDERS_KEY, orders_json) {
            self.restore_key(WORK_CENTERS_KEY, previous_centers);
            return Err(err);
        }

        self.work_centers = centers;
        self.work_orders = orders;
        Ok(())
    }

    /// Persists `orders` and swaps them in only once the store accepted them.
    fn commit_orders(&mut self, orders: IndexMap<String, WorkOrder>) -> TimelineResult<()> {
        let json = to_json(&orders.values().collect::<Vec<_>>())?;
        self.store.set(WORK_ORDERS_KEY, json)?;
        self.work_orders = orders;
        Ok(())
    }

    fn restore_key(&mut self, key: &str, previous: Option<String>) {
        let restored = match previous {
            Some(value) => self.store.set(key, value),
            None => {
                self.store.remove(key);
                Ok(())
            }
        };
        if let Err(err) = restored {
            warn!(key, error = %err, "failed to roll back schedule board key");
        }
    }
}

fn stored_value<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).filter(|value| !value.trim().is_empty())
}

fn index_orders(orders: Vec<WorkOrder>) -> IndexMap<String, WorkOrder> {
    orders
        .into_iter()
        .map(|order| (order.id.clone(), order))
        .collect()
}

fn parse_json<T: DeserializeOwned>(key: &str, input: &str) -> TimelineResult<T> {
    serde_json::from_str(input)
        .map_err(|e| TimelineError::Storage(format!("failed to parse `{key}`: {e}")))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> TimelineResult<String> {
    serde_json::to_string(value)
        .map_err(|e| TimelineError::Storage(format!("failed to serialize board: {e}")))
}
