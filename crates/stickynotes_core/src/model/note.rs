//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the note store.
//! - Provide draft validation for the add/edit flows.
//!
//! # Invariants
//! - `created_at` is the identity key for edit/delete targeting and must be
//!   unique and non-zero among stored notes.
//! - Serialized field names are fixed by the legacy blob format: `title`,
//!   `subtitle`, `createdAt`, `reminderAt`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Canonical note record.
///
/// The serialized shape must match blobs written by earlier releases, so the
/// body field keeps its legacy wire name `subtitle` while the Rust field is
/// named for what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Display title.
    pub title: String,
    /// Free-text body. Wire name is `subtitle` for blob compatibility.
    #[serde(rename = "subtitle")]
    pub content: String,
    /// Unix epoch milliseconds. Identity key across edit/delete.
    ///
    /// Defaults to `0` when absent in legacy blobs; the store repairs zero
    /// stamps at load time.
    #[serde(default)]
    pub created_at: i64,
    /// Unix epoch milliseconds of the displayed reminder date, if any.
    /// Omitted from the blob when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_at: Option<i64>,
}

impl Note {
    /// Creates a note stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_created_at(title, content, now_millis())
    }

    /// Creates a note with a caller-provided identity stamp.
    ///
    /// Used by import/test paths where the stamp already exists externally.
    pub fn with_created_at(
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            created_at,
            reminder_at: None,
        }
    }
}

/// Input shape for the add/edit flows.
///
/// Carries everything a user supplies; identity stamping stays with the
/// service so drafts can be validated before any storage work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub reminder_at: Option<i64>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            reminder_at: None,
        }
    }

    pub fn with_reminder(mut self, reminder_at: i64) -> Self {
        self.reminder_at = Some(reminder_at);
        self
    }

    /// Rejects drafts whose title or body is blank after trimming.
    ///
    /// The store itself persists whatever it is given; this check belongs to
    /// the write flows so direct store access stays format-compatible with
    /// blobs written before validation existed.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Validation failure for note drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be blank"),
            Self::EmptyContent => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// Current time as Unix epoch milliseconds.
///
/// Clamped to a minimum of `1` so a misconfigured pre-epoch clock can never
/// produce the reserved zero stamp.
pub fn now_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_millis() as i64).max(1),
        Err(_) => 1,
    }
}

/// Formats an epoch-millisecond stamp as `yyyy-MM-dd` for display.
///
/// Returns an empty string for `None` or out-of-range stamps, matching the
/// blank reminder line on cards without a reminder.
pub fn format_date(stamp: Option<i64>) -> String {
    let Some(millis) = stamp else {
        return String::new();
    };
    match OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000) {
        Ok(moment) => moment.format(&DATE_FORMAT).unwrap_or_default(),
        Err(_) => String::new(),
    }
}
