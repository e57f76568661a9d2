//! Pure query transformations over in-memory note collections.
//!
//! # Responsibility
//! - Provide the display ordering and search filtering the UI composes.
//!
//! # Invariants
//! - Nothing in this module touches storage; every function is a pure
//!   transformation of its inputs.
//! - Display ordering is always computed here on read, never persisted.

pub mod filter;
pub mod sort;
