//! Core use-case services.
//!
//! # Responsibility
//! - Expose note and comment operations on behalf of a current user.
//! - Keep callers decoupled from record storage details.

pub mod note_service;
