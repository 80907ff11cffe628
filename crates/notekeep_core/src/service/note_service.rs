//! Note and comment use-case service.
//!
//! # Responsibility
//! - Own the canonical note and comment tables.
//! - Gate every mutation on the acting user's ownership.
//! - Cascade note deletion onto the note's comments.
//!
//! # Invariants
//! - Records are only tombstoned, never removed, so ids stay stable.
//! - Callers receive clones; stored records change only through this service.
//! - Owner-gated misses (absent, foreign, wrong delete-state) yield `false` or
//!   `None`. A missing or deleted note required by comment creation, listing
//!   or restore yields `NoteServiceError::NoteNotFound`.
//! - Logs carry ids and outcomes only, never titles, bodies or messages.

use crate::clock::{Clock, SystemClock};
use crate::model::comment::{Comment, CommentId};
use crate::model::note::{Note, NoteId};
use crate::model::{Tombstoned, UserId, DEFAULT_USER_ID};
use crate::repo::record_table::RecordTable;
use log::{debug, info, trace, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// A note the operation depends on is missing or deleted.
    NoteNotFound(NoteId),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(note_id) => {
                write!(f, "note with id {note_id} not found or deleted")
            }
        }
    }
}

impl Error for NoteServiceError {}

/// In-memory note service acting on behalf of one current user.
#[derive(Debug)]
pub struct NoteService<C: Clock = SystemClock> {
    notes: RecordTable<Note>,
    comments: RecordTable<Comment>,
    current_user: UserId,
    clock: C,
}

impl NoteService<SystemClock> {
    /// Creates an empty service acting as `DEFAULT_USER_ID`.
    pub fn new() -> Self {
        Self::with_user(DEFAULT_USER_ID)
    }

    /// Creates an empty service acting as `user_id`.
    pub fn with_user(user_id: UserId) -> Self {
        Self::with_clock(user_id, SystemClock)
    }
}

impl Default for NoteService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NoteService<C> {
    /// Creates an empty service with an explicit clock.
    pub fn with_clock(user_id: UserId, clock: C) -> Self {
        Self {
            notes: RecordTable::new(),
            comments: RecordTable::new(),
            current_user: user_id,
            clock,
        }
    }

    /// User every operation currently acts as.
    pub fn current_user(&self) -> UserId {
        self.current_user
    }

    /// Switches the acting user for subsequent calls.
    pub fn set_current_user(&mut self, user_id: UserId) {
        debug!(
            "event=user_switch module=note_service status=ok from={} to={}",
            self.current_user, user_id
        );
        self.current_user = user_id;
    }

    /// Creates a note owned by the current user and returns its id.
    pub fn add(&mut self, title: impl Into<String>, text: impl Into<String>) -> NoteId {
        let owner_id = self.current_user;
        let date = self.clock.now_epoch_ms();
        let note_id = self
            .notes
            .insert_with(|id| Note::new(id, owner_id, title, text, date));

        info!(
            "event=note_create module=note_service status=ok note_id={} owner_id={}",
            note_id, owner_id
        );
        note_id
    }

    /// Comments on a live note (any owner) and returns the comment id.
    ///
    /// # Errors
    /// - `NoteNotFound` when no live note has `note_id`.
    pub fn create_comment(
        &mut self,
        note_id: NoteId,
        message: impl Into<String>,
    ) -> ServiceResult<CommentId> {
        if !self.notes.contains_active(note_id) {
            warn!(
                "event=comment_create module=note_service status=error reason=note_not_found note_id={}",
                note_id
            );
            return Err(NoteServiceError::NoteNotFound(note_id));
        }

        let owner_id = self.current_user;
        let date = self.clock.now_epoch_ms();
        let comment_id = self
            .comments
            .insert_with(|id| Comment::new(id, note_id, owner_id, message, date));

        info!(
            "event=comment_create module=note_service status=ok comment_id={} note_id={} owner_id={}",
            comment_id, note_id, owner_id
        );
        Ok(comment_id)
    }

    /// Tombstones an owned live note and every comment on it.
    ///
    /// The cascade ignores comment ownership and prior delete-state.
    /// Returns `false` when the note is absent, foreign or already deleted.
    pub fn delete(&mut self, note_id: NoteId) -> bool {
        let user_id = self.current_user;
        let Some(note) = self
            .notes
            .find_mut(note_id, |note| note.is_owned_by(user_id) && note.is_active())
        else {
            debug!(
                "event=note_delete module=note_service status=declined note_id={}",
                note_id
            );
            return false;
        };
        note.soft_delete();

        let mut cascaded = 0usize;
        for comment in self
            .comments
            .iter_mut()
            .filter(|comment| comment.note_id == note_id)
        {
            comment.soft_delete();
            cascaded += 1;
        }

        info!(
            "event=note_delete module=note_service status=ok note_id={} cascaded_comments={}",
            note_id, cascaded
        );
        true
    }

    /// Tombstones an owned live comment. No cascade.
    pub fn delete_comment(&mut self, comment_id: CommentId) -> bool {
        let user_id = self.current_user;
        let Some(comment) = self.comments.find_mut(comment_id, |comment| {
            comment.is_owned_by(user_id) && comment.is_active()
        }) else {
            debug!(
                "event=comment_delete module=note_service status=declined comment_id={}",
                comment_id
            );
            return false;
        };
        comment.soft_delete();

        info!(
            "event=comment_delete module=note_service status=ok comment_id={}",
            comment_id
        );
        true
    }

    /// Replaces title and text of an owned live note.
    ///
    /// `id` and `date` stay unchanged. Returns `false` when the note is
    /// absent, foreign or deleted.
    pub fn edit(
        &mut self,
        note_id: NoteId,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> bool {
        let user_id = self.current_user;
        let Some(note) = self
            .notes
            .find_mut(note_id, |note| note.is_owned_by(user_id) && note.is_active())
        else {
            debug!(
                "event=note_edit module=note_service status=declined note_id={}",
                note_id
            );
            return false;
        };
        note.title = title.into();
        note.text = text.into();

        info!(
            "event=note_edit module=note_service status=ok note_id={}",
            note_id
        );
        true
    }

    /// Replaces the message of an owned live comment.
    pub fn edit_comment(&mut self, comment_id: CommentId, message: impl Into<String>) -> bool {
        let user_id = self.current_user;
        let Some(comment) = self.comments.find_mut(comment_id, |comment| {
            comment.is_owned_by(user_id) && comment.is_active()
        }) else {
            debug!(
                "event=comment_edit module=note_service status=declined comment_id={}",
                comment_id
            );
            return false;
        };
        comment.message = message.into();

        info!(
            "event=comment_edit module=note_service status=ok comment_id={}",
            comment_id
        );
        true
    }

    /// Lists the current user's live notes in creation order.
    pub fn get(&self) -> Vec<Note> {
        let user_id = self.current_user;
        let notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.is_owned_by(user_id) && note.is_active())
            .cloned()
            .collect();

        trace!(
            "event=note_list module=note_service status=ok owner_id={} count={}",
            user_id,
            notes.len()
        );
        notes
    }

    /// Gets one live note owned by the current user.
    pub fn get_by_id(&self, note_id: NoteId) -> Option<Note> {
        let user_id = self.current_user;
        self.notes
            .find(note_id, |note| note.is_owned_by(user_id) && note.is_active())
            .cloned()
    }

    /// Lists live comments on a live note in creation order.
    ///
    /// Neither the note nor its comments are filtered by owner: a note's
    /// thread may hold comments from several users.
    ///
    /// # Errors
    /// - `NoteNotFound` when no live note has `note_id`.
    pub fn get_comments(&self, note_id: NoteId) -> ServiceResult<Vec<Comment>> {
        if !self.notes.contains_active(note_id) {
            warn!(
                "event=comment_list module=note_service status=error reason=note_not_found note_id={}",
                note_id
            );
            return Err(NoteServiceError::NoteNotFound(note_id));
        }

        let comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|comment| comment.note_id == note_id && comment.is_active())
            .cloned()
            .collect();

        trace!(
            "event=comment_list module=note_service status=ok note_id={} count={}",
            note_id,
            comments.len()
        );
        Ok(comments)
    }

    /// Clears the tombstone of an owned deleted comment.
    ///
    /// Returns `Ok(false)` when the comment is absent, foreign or not deleted.
    ///
    /// # Errors
    /// - `NoteNotFound` when the comment's note is missing or deleted; the
    ///   comment stays deleted.
    pub fn restore_comment(&mut self, comment_id: CommentId) -> ServiceResult<bool> {
        let user_id = self.current_user;
        let Some(comment) = self.comments.find_mut(comment_id, |comment| {
            comment.is_owned_by(user_id) && comment.is_deleted()
        }) else {
            debug!(
                "event=comment_restore module=note_service status=declined comment_id={}",
                comment_id
            );
            return Ok(false);
        };

        if !self.notes.contains_active(comment.note_id) {
            warn!(
                "event=comment_restore module=note_service status=error reason=note_not_found comment_id={} note_id={}",
                comment_id, comment.note_id
            );
            return Err(NoteServiceError::NoteNotFound(comment.note_id));
        }
        comment.restore();

        info!(
            "event=comment_restore module=note_service status=ok comment_id={}",
            comment_id
        );
        Ok(true)
    }
}
