//! Core domain logic for notekeep.
//! This crate is the single source of truth for note/comment invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::comment::{Comment, CommentId};
pub use model::note::{Note, NoteId};
pub use model::{Timestamp, Tombstoned, UserId, DEFAULT_USER_ID};
pub use repo::record_table::RecordTable;
pub use service::note_service::{NoteService, NoteServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
