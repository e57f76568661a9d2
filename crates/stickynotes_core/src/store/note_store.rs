//! Durable load/save of the full note collection.
//!
//! # Responsibility
//! - Read and write the one JSON blob under the fixed storage key.
//! - Repair legacy records that predate the `createdAt` field.
//!
//! # Invariants
//! - The blob is a JSON array of objects with fields `title`, `subtitle`,
//!   `createdAt` and optional `reminderAt`; this exact shape is the
//!   compatibility contract with previously saved data.
//! - An absent or empty value loads as an empty collection, not an error.
//! - Load never returns a note with `created_at == 0`.

use crate::model::note::{now_millis, Note};
use crate::prefs::{PrefStore, PrefsError};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Preference table holding the note blob.
pub const NOTES_TABLE: &str = "sticky_notes_prefs";
/// Key under which the serialized collection is stored.
pub const NOTES_KEY: &str = "notes_json";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for note persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Preference backend failure.
    Prefs(PrefsError),
    /// Stored blob exists but does not parse as a note collection.
    Corrupt(serde_json::Error),
    /// Collection could not be serialized for saving.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefs(err) => write!(f, "{err}"),
            Self::Corrupt(err) => write!(f, "corrupt notes blob: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prefs(err) => Some(err),
            Self::Corrupt(err) | Self::Serialize(err) => Some(err),
        }
    }
}

impl From<PrefsError> for StoreError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}

/// Full-collection note store over a preference backend.
pub struct NoteStore<P: PrefStore> {
    prefs: P,
}

impl<P: PrefStore> NoteStore<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    /// Releases the underlying preference backend.
    pub fn into_inner(self) -> P {
        self.prefs
    }

    /// Loads the collection, treating a corrupt blob as empty.
    ///
    /// This preserves the historical recovery policy: a blob that fails to
    /// parse is dropped and the app continues with no notes. The swallowed
    /// corruption is logged; callers that need to distinguish "no notes"
    /// from "corrupted notes" use [`NoteStore::load_strict`].
    pub fn load(&self) -> StoreResult<Vec<Note>> {
        match self.load_strict() {
            Ok(notes) => Ok(notes),
            Err(StoreError::Corrupt(err)) => {
                warn!("event=notes_load module=store status=recovered reason=corrupt_blob error={err}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Loads the collection, surfacing a corrupt blob as [`StoreError::Corrupt`].
    pub fn load_strict(&self) -> StoreResult<Vec<Note>> {
        let Some(raw) = self.prefs.get_string(NOTES_TABLE, NOTES_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let notes: Vec<Note> = serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
        let notes = repair_zero_stamps(notes);
        info!(
            "event=notes_load module=store status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    /// Replaces the stored collection with `notes`.
    ///
    /// Add, edit and delete flows all funnel through this single full
    /// replace; partial writes of the blob do not exist.
    pub fn save(&mut self, notes: &[Note]) -> StoreResult<()> {
        let json = serde_json::to_string(notes).map_err(StoreError::Serialize)?;
        self.prefs.put_string(NOTES_TABLE, NOTES_KEY, &json)?;
        info!(
            "event=notes_save module=store status=ok count={}",
            notes.len()
        );
        Ok(())
    }
}

/// Substitutes fresh stamps for legacy records loaded with `created_at == 0`.
///
/// Several records may need repair in one load; each patched stamp is nudged
/// forward until unique so the identity invariant holds for the whole
/// collection, not just record by record.
fn repair_zero_stamps(mut notes: Vec<Note>) -> Vec<Note> {
    let mut used: HashSet<i64> = notes
        .iter()
        .map(|note| note.created_at)
        .filter(|stamp| *stamp != 0)
        .collect();

    let mut repaired = 0usize;
    for note in notes.iter_mut().filter(|note| note.created_at == 0) {
        let mut stamp = now_millis();
        while !used.insert(stamp) {
            stamp += 1;
        }
        note.created_at = stamp;
        repaired += 1;
    }

    if repaired > 0 {
        info!("event=notes_repair module=store status=ok count={repaired}");
    }
    notes
}
