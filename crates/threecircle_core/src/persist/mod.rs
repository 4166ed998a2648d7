//! Participant persistence boundary.
//!
//! # Responsibility
//! - Round-trip the participant collection through JSON text.
//! - Name export files consistently.
//!
//! # Invariants
//! - Only the participant collection is persisted; buckets and diagrams are
//!   always recomputed.
//! - File I/O stays with the caller; this module works on strings.

pub mod export;
pub mod json;
