//! Comment record attached to a note.

use super::note::NoteId;
use super::{Timestamp, Tombstoned, UserId};
use serde::{Deserialize, Serialize};

/// Service-assigned comment identifier.
pub type CommentId = u64;

/// A user-owned comment on a note.
///
/// `note_id` keeps pointing at its note after the note is deleted; the link is
/// never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub note_id: NoteId,
    pub owner_id: UserId,
    pub message: String,
    /// Creation time in epoch milliseconds. Never updated.
    pub date: Timestamp,
    pub is_deleted: bool,
}

impl Comment {
    /// Creates a live comment.
    pub fn new(
        id: CommentId,
        note_id: NoteId,
        owner_id: UserId,
        message: impl Into<String>,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            note_id,
            owner_id,
            message: message.into(),
            date,
            is_deleted: false,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

impl Tombstoned for Comment {
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
