//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical todo record and its persisted wire shape.
//! - Own the title normalization rule applied to create/rename input.
//!
//! # Invariants
//! - `id` is stable for the item's lifetime and never reused.
//! - `title` is non-empty and carries no leading/trailing whitespace.
//! - `completed` starts as `false` at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Canonical todo record; also the persisted wire shape.
///
/// The serialized field layout (`id`, `title`, `completed`) is the storage
/// contract, and persisted sequence order equals display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable global ID assigned at creation.
    pub id: TodoId,
    /// Trimmed, non-empty task text. Interior whitespace is preserved.
    pub title: String,
    /// Done flag; independent of list membership.
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new active item with a generated stable ID.
    ///
    /// Callers are expected to pass normalized text; store entry points go
    /// through [`normalize_title`] first.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used by hydration paths where identity already exists in storage.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Returns whether this item counts toward the "items left" total.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Normalizes raw input text for create and rename operations.
///
/// Returns `None` when the trimmed result is empty; such input never creates
/// or keeps an item. Interior whitespace is untouched.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
