//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and query calls into the add/edit/delete/list/search
//!   flows the UI drives.
//! - Serialize every load-mutate-save window behind one lock.

pub mod note_service;
