//! Note record.
//!
//! # Invariants
//! - `id`, `owner_id` and `date` are fixed at creation.
//! - Only `title`, `text` and `is_deleted` change over the record lifetime.

use super::{Timestamp, Tombstoned, UserId};
use serde::{Deserialize, Serialize};

/// Service-assigned note identifier.
pub type NoteId = u64;

/// A user-owned note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// User that created the note.
    pub owner_id: UserId,
    pub title: String,
    pub text: String,
    /// Creation time in epoch milliseconds. Never updated.
    pub date: Timestamp,
    /// Soft delete tombstone.
    pub is_deleted: bool,
}

impl Note {
    /// Creates a live note.
    pub fn new(
        id: NoteId,
        owner_id: UserId,
        title: impl Into<String>,
        text: impl Into<String>,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            text: text.into(),
            date,
            is_deleted: false,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

impl Tombstoned for Note {
    fn id(&self) -> u64 {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}
