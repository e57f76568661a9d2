//! Domain model for sticky notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage and query layers.
//! - Keep wire-format naming compatible with previously saved data.
//!
//! # Invariants
//! - Every stored note is identified by a non-zero `created_at` stamp.
//! - Deletion is destructive; there is no tombstone state.

pub mod note;
