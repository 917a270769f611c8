//! Gesture-level use-case services.
//!
//! # Responsibility
//! - Orchestrate store and session state into UI-facing commands.
//! - Keep rendering shells decoupled from storage details.

pub mod todo_service;
