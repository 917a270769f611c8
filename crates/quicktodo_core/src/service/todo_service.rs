//! Gesture-level use-case service for the todo UI.
//!
//! # Responsibility
//! - Translate view gestures (text commits, toggles, navigation) into store
//!   operations.
//! - Own the per-session state: filter, entry draft, edit draft.
//!
//! # Invariants
//! - Keystroke-level draft updates never touch the store or storage.
//! - Filter changes never trigger a storage write.
//! - An item in edit mode cannot have its completion toggled.

use crate::filter::Filter;
use crate::model::todo::{TodoId, TodoItem};
use crate::session::{EditDraft, Session};
use crate::storage::slot_storage::{StorageResult, TodoStorage};
use crate::store::todo_store::{RenameOutcome, TodoStore};

/// Outcome of committing an in-progress edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Draft committed as the new title.
    Committed(TodoId),
    /// Draft was blank, so the item was removed.
    Removed(TodoId),
    /// No edit was in progress, or the item vanished underneath the edit.
    NotEditing,
}

/// Use-case facade pairing one todo store with one UI session.
pub struct TodoService<S: TodoStorage> {
    store: TodoStore<S>,
    session: Session,
}

impl<S: TodoStorage> TodoService<S> {
    /// Hydrates the store from storage and starts a fresh session.
    pub fn load(storage: S) -> StorageResult<Self> {
        Ok(Self {
            store: TodoStore::load(storage)?,
            session: Session::default(),
        })
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    /// Current session snapshot.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Buffers new-entry text. Store and storage stay untouched.
    pub fn set_entry(&mut self, text: impl Into<String>) {
        self.session.entry = text.into();
    }

    /// Commits the entry buffer as a new item and clears the buffer.
    ///
    /// A blank buffer clears without creating anything.
    pub fn commit_entry(&mut self) -> StorageResult<Option<TodoId>> {
        let raw = std::mem::take(&mut self.session.entry);
        self.store.add(&raw)
    }

    /// Enters edit mode for one item, seeding the draft with its title.
    ///
    /// Unknown ids are refused. Any previous draft is discarded; only one
    /// item is in edit mode at a time.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        let Some(item) = self.store.get(id) else {
            return false;
        };
        self.session.editing = Some(EditDraft {
            id,
            text: item.title.clone(),
        });
        true
    }

    /// Replaces the uncommitted edit draft text.
    ///
    /// A no-op while no edit is in progress.
    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.session.editing.as_mut() {
            draft.text = text.into();
        }
    }

    /// Leaves edit mode and applies the draft with rename semantics: the
    /// text is trimmed, and a blank draft removes the item.
    pub fn commit_edit(&mut self) -> StorageResult<EditOutcome> {
        let Some(draft) = self.session.editing.take() else {
            return Ok(EditOutcome::NotEditing);
        };

        let outcome = match self.store.rename(draft.id, &draft.text)? {
            RenameOutcome::Renamed => EditOutcome::Committed(draft.id),
            RenameOutcome::Removed => EditOutcome::Removed(draft.id),
            RenameOutcome::NotFound => EditOutcome::NotEditing,
        };
        Ok(outcome)
    }

    /// Leaves edit mode without committing; the stored title is unchanged.
    pub fn cancel_edit(&mut self) {
        self.session.editing = None;
    }

    /// Returns whether the given item is currently being edited.
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.session.is_editing(id)
    }

    /// Whether the completion toggle for an item is actionable.
    ///
    /// The toggle is withdrawn, not merely restyled, while the item is in
    /// edit mode.
    pub fn can_toggle(&self, id: TodoId) -> bool {
        !self.session.is_editing(id)
    }

    /// Sets one item's completion flag.
    ///
    /// Refused while the item is in edit mode; unknown ids are a no-op.
    pub fn set_completed(&mut self, id: TodoId, value: bool) -> StorageResult<bool> {
        if !self.can_toggle(id) {
            return Ok(false);
        }
        self.store.set_completed(id, value)
    }

    /// List-level toggle-all affordance.
    pub fn set_all_completed(&mut self, value: bool) -> StorageResult<()> {
        self.store.set_all_completed(value)
    }

    /// Per-item delete affordance. Deleting the edited item drops its draft.
    pub fn remove(&mut self, id: TodoId) -> StorageResult<bool> {
        if self.session.is_editing(id) {
            self.session.editing = None;
        }
        self.store.remove(id)
    }

    /// Clear-completed affordance.
    pub fn clear_completed(&mut self) -> StorageResult<usize> {
        let removed = self.store.clear_completed()?;
        if let Some(draft) = &self.session.editing {
            if self.store.get(draft.id).is_none() {
                self.session.editing = None;
            }
        }
        Ok(removed)
    }

    /// Switches the view selection. Session-only; never a storage write.
    pub fn set_filter(&mut self, filter: Filter) {
        self.session.filter = filter;
    }

    /// Current view selection.
    pub fn filter(&self) -> Filter {
        self.session.filter
    }

    /// Items visible under the current filter, in sequence order.
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.session.filter.apply(self.store.items()).collect()
    }

    /// Footer count label with singular/plural handling.
    pub fn count_label(&self) -> String {
        count_label(self.store.active_count())
    }

    /// Whether the clear-completed affordance is rendered.
    pub fn clear_completed_visible(&self) -> bool {
        self.store.has_completed()
    }
}

/// Formats the "N item(s) left" footer label.
///
/// Exactly one active item is singular; zero and everything else is plural.
pub fn count_label(active: usize) -> String {
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{active} items left")
    }
}
