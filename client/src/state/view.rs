//! Tagged view-state for per-record detail, edit, and delete flows.
//!
//! DESIGN
//! ======
//! Replaces blocking browser dialogs: delete confirmation and edit drafts
//! are ordinary view state a modal renders from, and every transition is an
//! explicit method, so nothing can mutate a record without going through a
//! draft.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Which record-level dialog, if any, is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordView<T> {
    /// No dialog open.
    Idle,
    /// Read-only detail dialog.
    Viewing(T),
    /// Delete-confirmation dialog.
    Confirming(T),
    /// Edit dialog; `draft` accumulates changes until finished or cancelled.
    Editing { original: T, draft: T },
}

// Manual impl: `Idle` needs no `T: Default` bound.
impl<T> Default for RecordView<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Clone> RecordView<T> {
    /// Open the read-only detail dialog for a record.
    pub fn inspect(&mut self, record: T) {
        *self = Self::Viewing(record);
    }

    /// Ask for confirmation before deleting a record.
    pub fn request_delete(&mut self, record: T) {
        *self = Self::Confirming(record);
    }

    /// Start editing a record; the draft begins as a copy of the original.
    pub fn begin_edit(&mut self, record: T) {
        *self = Self::Editing {
            original: record.clone(),
            draft: record,
        };
    }

    /// Close whatever dialog is open without acting.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Confirm a pending delete, yielding the doomed record. `None` when no
    /// confirmation dialog was open.
    pub fn confirm_delete(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Confirming(record) => Some(record),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Mutable access to the edit draft, when editing.
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Finish editing, yielding the draft to persist. `None` when no edit
    /// was in progress.
    pub fn finish_edit(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Editing { draft, .. } => Some(draft),
            other => {
                *self = other;
                None
            }
        }
    }

    /// True when no dialog is open.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
