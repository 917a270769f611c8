//! The ordered todo collection and its mutation rules.
//!
//! # Responsibility
//! - Apply create/rename/toggle/delete semantics to the item sequence.
//! - Write the full sequence through to storage after each change.
//!
//! # Invariants
//! - Insertion order is preserved; new items append at the end.
//! - No item exists with an empty or untrimmed title.
//! - Mutations that change nothing perform no storage write.
//! - Unknown ids are reported, never fatal.

use crate::model::todo::{normalize_title, TodoId, TodoItem};
use crate::storage::slot_storage::{StorageResult, TodoStorage};
use log::info;

/// Outcome of a rename operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Title replaced; completion state untouched.
    Renamed,
    /// Trimmed replacement text was empty, so the item was removed.
    Removed,
    /// No item with the given id exists.
    NotFound,
}

/// Ordered todo collection with write-through persistence.
pub struct TodoStore<S: TodoStorage> {
    items: Vec<TodoItem>,
    storage: S,
}

impl<S: TodoStorage> TodoStore<S> {
    /// Hydrates a store from the storage slot.
    ///
    /// An absent or unreadable slot yields an empty list.
    pub fn load(storage: S) -> StorageResult<Self> {
        let items = storage.load()?;
        info!(
            "event=store_hydrate module=store status=ok items={}",
            items.len()
        );
        Ok(Self { items, storage })
    }

    /// Appends a new active item built from raw input text.
    ///
    /// Whitespace-only input is a no-op: no item, no storage write, `None`
    /// returned. Duplicate titles are allowed and create distinct items;
    /// titles have no length limit.
    pub fn add(&mut self, raw: &str) -> StorageResult<Option<TodoId>> {
        let Some(title) = normalize_title(raw) else {
            return Ok(None);
        };

        let item = TodoItem::new(title);
        let id = item.id;
        self.items.push(item);
        self.persist()?;
        info!(
            "event=todo_add module=store status=ok id={id} items={}",
            self.items.len()
        );
        Ok(Some(id))
    }

    /// Replaces an item's title from raw input text.
    ///
    /// The same trim rule as [`TodoStore::add`] applies, except that clearing
    /// the text removes the item instead of renaming it. The completion flag
    /// survives a rename.
    pub fn rename(&mut self, id: TodoId, raw: &str) -> StorageResult<RenameOutcome> {
        let Some(position) = self.position(id) else {
            return Ok(RenameOutcome::NotFound);
        };

        let outcome = match normalize_title(raw) {
            Some(title) => {
                self.items[position].title = title;
                RenameOutcome::Renamed
            }
            None => {
                self.items.remove(position);
                RenameOutcome::Removed
            }
        };
        self.persist()?;
        info!("event=todo_rename module=store status=ok id={id} outcome={outcome:?}");
        Ok(outcome)
    }

    /// Sets the completion flag on exactly one item.
    ///
    /// Returns `false` for unknown ids; stale view references are not fatal.
    pub fn set_completed(&mut self, id: TodoId, value: bool) -> StorageResult<bool> {
        let Some(position) = self.position(id) else {
            return Ok(false);
        };

        self.items[position].completed = value;
        self.persist()?;
        Ok(true)
    }

    /// Sets the completion flag on every item in one pass.
    pub fn set_all_completed(&mut self, value: bool) -> StorageResult<()> {
        for item in &mut self.items {
            item.completed = value;
        }
        self.persist()?;
        info!(
            "event=todo_set_all module=store status=ok completed={value} items={}",
            self.items.len()
        );
        Ok(())
    }

    /// Deletes one item. Unknown ids are a no-op.
    pub fn remove(&mut self, id: TodoId) -> StorageResult<bool> {
        let Some(position) = self.position(id) else {
            return Ok(false);
        };

        self.items.remove(position);
        self.persist()?;
        info!(
            "event=todo_remove module=store status=ok id={id} items={}",
            self.items.len()
        );
        Ok(true)
    }

    /// Removes every completed item, keeping active items in order.
    ///
    /// Returns how many items were removed; zero removals skip the write.
    pub fn clear_completed(&mut self) -> StorageResult<usize> {
        let before = self.items.len();
        self.items.retain(TodoItem::is_active);
        let removed = before - self.items.len();

        if removed > 0 {
            self.persist()?;
            info!(
                "event=todo_clear_completed module=store status=ok removed={removed} items={}",
                self.items.len()
            );
        }
        Ok(removed)
    }

    /// Full ordered item slice, in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Looks up one item by id.
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items still active; drives the "N item(s) left" label.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    /// Whether any item is completed; drives clear-completed visibility.
    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn persist(&self) -> StorageResult<()> {
        self.storage.save(&self.items)
    }
}
