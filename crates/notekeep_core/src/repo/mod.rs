//! In-memory record storage.
//!
//! # Responsibility
//! - Hold canonical records keyed by id.
//! - Assign ids and keep insertion order for list reads.
//!
//! # Invariants
//! - Records are never removed; deletion is a tombstone flag on the record.
//! - Ids are assigned as `max + 1` and are therefore strictly increasing.

pub mod record_table;
