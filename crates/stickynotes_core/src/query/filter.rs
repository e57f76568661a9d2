//! Substring search over note collections.
//!
//! # Responsibility
//! - Implement the search screen's matching rule: case-insensitive substring
//!   match on title or content.
//!
//! # Invariants
//! - A blank query returns an empty result, never the full collection; the
//!   search screen shows nothing until the user types.
//! - Filtering is idempotent: re-filtering a result with the same query
//!   returns it unchanged.

use crate::model::note::Note;

/// Returns the notes whose title or content contains `query`,
/// case-insensitively.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
