//! Per-session UI state carried as explicit context.
//!
//! The current filter, the new-entry draft and the in-progress edit draft
//! are values owned by the caller, not ambient globals. None of them is
//! persisted; a fresh session starts at `Filter::All` with empty drafts.

use crate::filter::Filter;
use crate::model::todo::TodoId;

/// In-progress edit of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// Item being edited.
    pub id: TodoId,
    /// Uncommitted replacement text.
    pub text: String,
}

/// Mutable view-layer state for one UI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Active view selection.
    pub filter: Filter,
    /// Uncommitted text in the new-todo entry field.
    pub entry: String,
    /// Edit-mode state; `None` while no item is being edited.
    pub editing: Option<EditDraft>,
}

impl Session {
    /// Returns whether the given item is currently in edit mode.
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|draft| draft.id == id)
    }
}
