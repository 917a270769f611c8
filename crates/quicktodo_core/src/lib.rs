//! Core domain logic for QuickTodo.
//! This crate is the single source of truth for todo-list behavior.

pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod storage;
pub mod store;

pub use filter::Filter;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{normalize_title, TodoId, TodoItem};
pub use service::todo_service::{count_label, EditOutcome, TodoService};
pub use session::{EditDraft, Session};
pub use storage::slot_storage::{
    SqliteSlotStorage, StorageError, StorageResult, TodoStorage, TODOS_SLOT_KEY,
};
pub use store::todo_store::{RenameOutcome, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
