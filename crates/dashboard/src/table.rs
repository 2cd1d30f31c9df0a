use std::marker::PhantomData;

use meterops_core::RecordId;
use meterops_infra::{GatewayError, RecordGateway};
use meterops_records::Record;

use crate::state::{Modal, Notification, TableState};

pub const ADDED: &str = "Item added successfully!";
pub const UPDATED: &str = "Item updated successfully!";
pub const DELETED: &str = "Item deleted successfully!";

/// Which user action failed, for the error notification text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Action {
    Load,
    Add,
    Update,
    Delete,
}

impl Action {
    fn failure_message(self) -> &'static str {
        match self {
            Action::Load => "Error loading items. Please try again later.",
            Action::Add => "Error adding item. Please try again later.",
            Action::Update => "Error updating item. Please try again later.",
            Action::Delete => "Error deleting item. Please try again later.",
        }
    }
}

/// Controller for one record table.
///
/// Every mutation is followed by a full re-fetch. Failures never propagate:
/// they become an error notification and the rows, selection and modal are
/// left as they were.
pub struct ResourceTable<R, G> {
    gateway: G,
    state: TableState<R>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, G: RecordGateway<R>> ResourceTable<R, G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: TableState::default(),
            _record: PhantomData,
        }
    }

    pub fn state(&self) -> &TableState<R> {
        &self.state
    }

    /// Re-fetch every row. Returns `false` if the previous rows were kept.
    pub async fn refresh(&mut self) -> bool {
        match self.gateway.list().await {
            Ok(rows) => {
                self.state.rows = rows;
                self.forget_missing();
                true
            }
            Err(e) => {
                self.fail(Action::Load, &e);
                false
            }
        }
    }

    pub async fn create(&mut self, record: R) -> bool {
        match self.gateway.create(record).await {
            Ok(_) => {
                self.state.notification = Some(Notification::success(ADDED));
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(Action::Add, &e);
                false
            }
        }
    }

    pub async fn update(&mut self, id: RecordId, record: R) -> bool {
        match self.gateway.update(id, record).await {
            Ok(_) => {
                self.state.notification = Some(Notification::success(UPDATED));
                if self.state.modal.as_ref().is_some_and(|m| m.target() == id) {
                    self.state.modal = None;
                }
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(Action::Update, &e);
                false
            }
        }
    }

    pub async fn delete(&mut self, id: RecordId) -> bool {
        match self.gateway.delete(id).await {
            Ok(_) => {
                self.state.notification = Some(Notification::success(DELETED));
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(Action::Delete, &e);
                false
            }
        }
    }

    /// Submit the open edit form.
    pub async fn save_edit(&mut self) -> bool {
        let Some(Modal::Edit { id, draft }) = self.state.modal.clone() else {
            return false;
        };
        self.update(id, draft).await
    }

    pub fn select(&mut self, id: RecordId) -> bool {
        if self.state.find(id).is_none() {
            self.missing_row(id);
            return false;
        }
        self.state.selected = Some(id);
        true
    }

    pub fn open_view(&mut self, id: RecordId) -> bool {
        let Some(row) = self.state.find(id).cloned() else {
            self.missing_row(id);
            return false;
        };
        self.state.selected = Some(id);
        self.state.modal = Some(Modal::View(row));
        true
    }

    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let Some(row) = self.state.find(id) else {
            self.missing_row(id);
            return false;
        };
        let draft = row.record.clone();
        self.state.selected = Some(id);
        self.state.modal = Some(Modal::Edit { id, draft });
        true
    }

    /// Mutable access to the open edit form's values.
    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match &mut self.state.modal {
            Some(Modal::Edit { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    pub fn close_modal(&mut self) {
        self.state.modal = None;
    }

    fn fail(&mut self, action: Action, err: &GatewayError) {
        tracing::warn!(kind = %R::KIND, ?action, error = %err, "table action failed");
        self.state.notification = Some(Notification::error(action.failure_message()));
    }

    fn missing_row(&mut self, id: RecordId) {
        tracing::warn!(kind = %R::KIND, %id, "row not in table");
        self.state.notification = Some(Notification::error(format!(
            "{} not found. Please try again later.",
            R::KIND.label()
        )));
    }

    // Drop selection and modal pointing at rows that no longer exist.
    fn forget_missing(&mut self) {
        if let Some(id) = self.state.selected {
            if self.state.find(id).is_none() {
                self.state.selected = None;
            }
        }
        if let Some(target) = self.state.modal.as_ref().map(Modal::target) {
            if self.state.find(target).is_none() {
                self.state.modal = None;
            }
        }
    }
}
