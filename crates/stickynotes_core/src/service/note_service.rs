//! Note use-case service.
//!
//! # Responsibility
//! - Provide the add/edit/delete/get/list/search flows over the note store.
//! - Validate drafts before any storage work happens.
//! - Hold the mutual-exclusion lock that serializes mutations of the single
//!   storage key.
//!
//! # Invariants
//! - Every mutation runs load-full, mutate-in-memory, save-full under the
//!   lock; two in-flight mutations can no longer race on the blob.
//! - `created_at` stamps assigned by `add_note` are unique within the
//!   collection.
//! - Edit and delete target notes by identity stamp only; a missing stamp is
//!   a `NoteNotFound`, never a silent no-op.

use crate::model::note::{now_millis, Note, NoteDraft, NoteValidationError};
use crate::prefs::PrefStore;
use crate::query::filter::filter_notes;
use crate::query::sort::{sort_notes, SortOrder};
use crate::store::note_store::{NoteStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type ServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft failed validation.
    Validation(NoteValidationError),
    /// No stored note carries the given identity stamp.
    NoteNotFound(i64),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(created_at) => write!(f, "note not found: {created_at}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoteNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Note service facade over the store.
///
/// Owns the store behind a mutex so overlapping calls from an event-driven
/// front end serialize instead of last-write-wins clobbering each other.
pub struct NoteService<P: PrefStore> {
    store: Mutex<NoteStore<P>>,
}

impl<P: PrefStore> NoteService<P> {
    pub fn new(store: NoteStore<P>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Releases the underlying store.
    pub fn into_inner(self) -> NoteStore<P> {
        self.store
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, NoteStore<P>> {
        // A panicked holder never leaves the blob half-written (save is one
        // put of one key), so a poisoned lock still guards consistent state.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validates and persists a new note, returning it with its assigned
    /// identity stamp.
    pub fn add_note(&self, draft: &NoteDraft) -> ServiceResult<Note> {
        draft.validate()?;

        let mut store = self.lock();
        let mut notes = store.load()?;
        let note = Note {
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: unique_stamp(now_millis(), &notes),
            reminder_at: draft.reminder_at,
        };
        notes.push(note.clone());
        store.save(&notes)?;
        Ok(note)
    }

    /// Replaces title, content and reminder of the note with the given
    /// identity stamp. The stamp itself never changes on edit.
    pub fn update_note(&self, created_at: i64, draft: &NoteDraft) -> ServiceResult<Note> {
        draft.validate()?;

        let mut store = self.lock();
        let mut notes = store.load()?;
        let target = notes
            .iter_mut()
            .find(|note| note.created_at == created_at)
            .ok_or(NoteServiceError::NoteNotFound(created_at))?;

        target.title = draft.title.clone();
        target.content = draft.content.clone();
        target.reminder_at = draft.reminder_at;
        let updated = target.clone();

        store.save(&notes)?;
        Ok(updated)
    }

    /// Removes the note with the given identity stamp. Destructive and
    /// immediate; there is no soft delete.
    pub fn delete_note(&self, created_at: i64) -> ServiceResult<()> {
        let mut store = self.lock();
        let mut notes = store.load()?;
        let before = notes.len();
        notes.retain(|note| note.created_at != created_at);
        if notes.len() == before {
            return Err(NoteServiceError::NoteNotFound(created_at));
        }

        store.save(&notes)?;
        Ok(())
    }

    /// Looks up one note by identity stamp.
    pub fn get_note(&self, created_at: i64) -> ServiceResult<Option<Note>> {
        let store = self.lock();
        let notes = store.load()?;
        Ok(notes.into_iter().find(|note| note.created_at == created_at))
    }

    /// Loads the collection sorted for display.
    pub fn list_notes(&self, order: SortOrder) -> ServiceResult<Vec<Note>> {
        let store = self.lock();
        let notes = store.load()?;
        Ok(sort_notes(notes, order))
    }

    /// Search-screen flow: sorted collection filtered by the query text.
    /// A blank query returns nothing.
    pub fn search_notes(&self, query: &str, order: SortOrder) -> ServiceResult<Vec<Note>> {
        let store = self.lock();
        let notes = store.load()?;
        Ok(filter_notes(&sort_notes(notes, order), query))
    }
}

/// Picks the first stamp at or after `candidate` not used by `notes`.
///
/// Millisecond clocks make collisions rare but possible when notes are added
/// back to back; nudging forward keeps the identity invariant without a
/// separate id field in the blob.
fn unique_stamp(candidate: i64, notes: &[Note]) -> i64 {
    let mut stamp = candidate.max(1);
    while notes.iter().any(|note| note.created_at == stamp) {
        stamp += 1;
    }
    stamp
}
