use meterops_core::RecordId;
use meterops_records::Stored;

/// The dialog currently open over a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<R> {
    /// Read-only view of a row.
    View(Stored<R>),
    /// Edit form seeded from a row; `draft` holds the in-progress values.
    Edit { id: RecordId, draft: R },
}

impl<R> Modal<R> {
    pub fn target(&self) -> RecordId {
        match self {
            Modal::View(stored) => stored.id,
            Modal::Edit { id, .. } => *id,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// User-visible outcome of the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Everything one table view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<R> {
    pub(crate) rows: Vec<Stored<R>>,
    pub(crate) selected: Option<RecordId>,
    pub(crate) modal: Option<Modal<R>>,
    pub(crate) notification: Option<Notification>,
}

impl<R> Default for TableState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selected: None,
            modal: None,
            notification: None,
        }
    }
}

impl<R> TableState<R> {
    pub fn rows(&self) -> &[Stored<R>] {
        &self.rows
    }

    pub fn selected(&self) -> Option<RecordId> {
        self.selected
    }

    pub fn modal(&self) -> Option<&Modal<R>> {
        self.modal.as_ref()
    }

    /// Values in the open edit form, if any.
    pub fn draft(&self) -> Option<&R> {
        match &self.modal {
            Some(Modal::Edit { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn find(&self, id: RecordId) -> Option<&Stored<R>> {
        self.rows.iter().find(|row| row.id == id)
    }
}
