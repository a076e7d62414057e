use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Point;

pub type StateListener<T> = Box<dyn FnMut(&T)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Value holder with synchronous change notification.
///
/// A new subscriber is called once with the current value, then after every
/// `set`/`update`, in subscription order.
pub struct StateCell<T> {
    value: T,
    listeners: Vec<(SubscriptionId, StateListener<T>)>,
    next_id: u64,
}

impl<T> StateCell<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutates in place, then notifies.
    pub fn update(&mut self, apply: impl FnOnce(&mut T)) {
        apply(&mut self.value);
        self.notify();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let mut listener: StateListener<T> = Box::new(listener);
        listener(&self.value);
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(entry_id, _)| *entry_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.value);
        }
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

/// Which row the pointer is over and where the action button is anchored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub row_id: Option<String>,
    pub work_center_id: Option<String>,
    pub button_position: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelMode {
    #[default]
    Create,
    Edit,
}

/// Side panel used to create or edit an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub is_open: bool,
    pub mode: PanelMode,
    pub work_center_id: String,
    pub start_date: Option<NaiveDate>,
    pub editing_entry_id: Option<String>,
}

/// Hover and panel state for one timeline view.
#[derive(Debug, Default)]
pub struct TimelineUiState {
    pub hover: StateCell<HoverState>,
    pub panel: StateCell<PanelState>,
}

impl TimelineUiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hover_state(
        &mut self,
        row_id: impl Into<String>,
        work_center_id: impl Into<String>,
        button_position: Option<Point>,
    ) {
        self.hover.set(HoverState {
            row_id: Some(row_id.into()),
            work_center_id: Some(work_center_id.into()),
            button_position,
        });
    }

    pub fn clear_hover_state(&mut self) {
        self.hover.set(HoverState::default());
    }

    pub fn update_button_position(&mut self, position: Option<Point>) {
        self.hover.update(|hover| hover.button_position = position);
    }

    #[must_use]
    pub fn current_hover_state(&self) -> &HoverState {
        self.hover.get()
    }

    pub fn open_create_panel(&mut self, work_center_id: impl Into<String>, start_date: NaiveDate) {
        self.panel.set(PanelState {
            is_open: true,
            mode: PanelMode::Create,
            work_center_id: work_center_id.into(),
            start_date: Some(start_date),
            editing_entry_id: None,
        });
    }

    pub fn open_edit_panel(
        &mut self,
        work_center_id: impl Into<String>,
        start_date: NaiveDate,
        entry_id: impl Into<String>,
    ) {
        self.panel.set(PanelState {
            is_open: true,
            mode: PanelMode::Edit,
            work_center_id: work_center_id.into(),
            start_date: Some(start_date),
            editing_entry_id: Some(entry_id.into()),
        });
    }

    pub fn close_panel(&mut self) {
        self.panel.set(PanelState::default());
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel.get().is_open
    }
}
