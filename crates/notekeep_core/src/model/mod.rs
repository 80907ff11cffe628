//! Domain model for notes and their comments.
//!
//! # Responsibility
//! - Define the canonical records owned by the note service.
//! - Provide the shared tombstone contract used by id generation and lookups.
//!
//! # Invariants
//! - Every record is identified by a positive, never reused integer id.
//! - Deletion is represented by soft-delete tombstones, not removal.

pub mod comment;
pub mod note;

/// Identity of the user a record belongs to.
pub type UserId = u64;

/// Epoch milliseconds.
pub type Timestamp = i64;

/// Identity used when no other user has been selected.
pub const DEFAULT_USER_ID: UserId = 1;

/// Lifecycle contract shared by every soft-deletable record.
pub trait Tombstoned {
    /// Stable record id within its own collection.
    fn id(&self) -> u64;

    /// Returns whether the tombstone flag is set.
    fn is_deleted(&self) -> bool;

    /// Sets or clears the tombstone flag.
    fn set_deleted(&mut self, deleted: bool);

    /// Marks this record as softly deleted.
    fn soft_delete(&mut self) {
        self.set_deleted(true);
    }

    /// Clears the soft delete flag.
    fn restore(&mut self) {
        self.set_deleted(false);
    }

    /// Returns whether this record is visible to normal reads.
    fn is_active(&self) -> bool {
        !self.is_deleted()
    }
}
