//! Persistence layer: durable slot contracts and implementations.
//!
//! # Responsibility
//! - Define the storage contract the todo store writes through.
//! - Isolate SQLite and payload-encoding details from store logic.
//!
//! # Invariants
//! - The persisted payload always holds the full ordered item sequence.
//! - A missing or corrupt slot hydrates as an empty list, never as an error.

pub mod slot_storage;
