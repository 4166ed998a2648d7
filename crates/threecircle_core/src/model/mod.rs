//! Domain model for the three-circle diagram.
//!
//! # Responsibility
//! - Define participants, circles and the seven overlap regions.
//! - Provide injectable identity generation for new participants.
//!
//! # Invariants
//! - Every participant carries an id that is never reused within a roster.
//! - A participant maps to at most one region, decided by its three flags.

pub mod id;
pub mod participant;
pub mod region;
pub mod roster;
