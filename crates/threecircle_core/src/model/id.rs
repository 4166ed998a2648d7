//! Participant identity and id generation capabilities.
//!
//! # Responsibility
//! - Keep participant ids opaque (imported files may carry any string).
//! - Abstract "next id" allocation so callers decide between entropy-backed
//!   and deterministic sources.
//!
//! # Invariants
//! - A generator never yields the same id twice over its lifetime.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque, stable participant identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Wraps an existing identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ParticipantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh participant ids.
pub trait IdGenerator {
    /// Allocates an id that this generator has not returned before.
    fn next_id(&mut self) -> ParticipantId;

    /// Draws ids until one is not `taken`; imported ids may already occupy
    /// values this generator has yet to produce.
    fn next_unused(&mut self, taken: &dyn Fn(&ParticipantId) -> bool) -> ParticipantId {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> ParticipantId {
        (**self).next_id()
    }
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ParticipantId {
        ParticipantId(Uuid::new_v4().to_string())
    }
}

/// Deterministic generator yielding `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("p")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ParticipantId {
        let id = ParticipantId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
