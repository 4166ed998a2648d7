//! Participant classification into the seven overlap regions.
//!
//! # Responsibility
//! - Partition a participant sequence into disjoint region buckets.
//! - Derive the ordered advisory lines from bucket sizes.
//!
//! # Invariants
//! - Both operations are pure and never mutate their input.
//! - Within a bucket, participants keep their input order.

pub mod advisory;
pub mod buckets;
