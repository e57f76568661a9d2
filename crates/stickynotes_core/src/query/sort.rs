//! Note ordering criteria.
//!
//! # Responsibility
//! - Define the five user-selectable sort orders and their preference labels.
//! - Sort collections stably under each criterion.
//!
//! # Invariants
//! - Labels match the strings persisted by earlier releases; an unrecognized
//!   label sorts as the identity transform, not an error.
//! - All sorts are stable: notes comparing equal keep their input order.

use crate::model::note::Note;
use std::cmp::Reverse;

/// User-selectable display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Case-insensitive title, A to Z.
    TitleAsc,
    /// Case-insensitive title, Z to A.
    TitleDesc,
    /// Notes with a reminder first, ascending by reminder date; the rest
    /// after in input order.
    ReminderDate,
    CreationNewest,
    CreationOldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::ReminderDate,
        SortOrder::CreationNewest,
        SortOrder::CreationOldest,
    ];

    /// Preference label as persisted under `sort_by`.
    pub fn label(self) -> &'static str {
        match self {
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::ReminderDate => "Reminder Date",
            Self::CreationNewest => "Creation Date (Newest)",
            Self::CreationOldest => "Creation Date (Oldest)",
        }
    }

    /// Resolves a persisted label; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<SortOrder> {
        Self::ALL.into_iter().find(|order| order.label() == label)
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::TitleAsc
    }
}

/// Sorts `notes` by `order` and returns the reordered collection.
pub fn sort_notes(mut notes: Vec<Note>, order: SortOrder) -> Vec<Note> {
    match order {
        SortOrder::TitleAsc => notes.sort_by_cached_key(|note| note.title.to_lowercase()),
        SortOrder::TitleDesc => {
            notes.sort_by_cached_key(|note| Reverse(note.title.to_lowercase()))
        }
        SortOrder::ReminderDate => {
            notes.sort_by_key(|note| (note.reminder_at.is_none(), note.reminder_at))
        }
        SortOrder::CreationNewest => notes.sort_by_key(|note| Reverse(note.created_at)),
        SortOrder::CreationOldest => notes.sort_by_key(|note| note.created_at),
    }
    notes
}

/// Sorts by a persisted preference label.
///
/// An unrecognized label returns the input order unchanged, matching how the
/// settings screen's string-keyed dispatch has always behaved.
pub fn sort_notes_by_label(notes: Vec<Note>, label: &str) -> Vec<Note> {
    match SortOrder::from_label(label) {
        Some(order) => sort_notes(notes, order),
        None => notes,
    }
}
