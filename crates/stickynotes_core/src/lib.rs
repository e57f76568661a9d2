//! Core domain logic for the sticky notes app.
//! This crate is the single source of truth for note persistence and queries.

pub mod db;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod query;
pub mod service;
pub mod settings;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{format_date, now_millis, Note, NoteDraft, NoteValidationError};
pub use prefs::{MemoryPrefStore, PrefStore, PrefsError, PrefsResult, SqlitePrefStore};
pub use query::filter::filter_notes;
pub use query::sort::{sort_notes, sort_notes_by_label, SortOrder};
pub use service::note_service::{NoteService, NoteServiceError, ServiceResult};
pub use settings::{DisplaySettings, FontSize, FontStyle, Theme, ViewMode};
pub use store::note_store::{NoteStore, StoreError, StoreResult, NOTES_KEY, NOTES_TABLE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
