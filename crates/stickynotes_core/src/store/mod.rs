//! Note persistence layer.
//!
//! # Responsibility
//! - Own the single storage key holding the serialized note collection.
//! - Isolate blob format details from query/service layers.
//!
//! # Invariants
//! - Every save is a full-collection replace of one key; there is no
//!   incremental upsert path.
//! - Notes returned from a load carry non-zero `created_at` stamps.

pub mod note_store;
