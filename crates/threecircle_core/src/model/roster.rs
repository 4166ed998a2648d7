//! Immutable participant collection.
//!
//! # Invariants
//! - A roster is never mutated in place; `with_added` / `without` return a
//!   new collection.
//! - Insertion order is preserved and drives within-bucket order.

use crate::locale::Locale;
use crate::model::id::{IdGenerator, ParticipantId};
use crate::model::participant::Participant;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// The six-person sample of a family business, with fresh ids.
    pub fn sample(ids: &mut dyn IdGenerator, locale: Locale) -> Self {
        const FLAGS: [(bool, bool, bool); 6] = [
            (true, true, true),
            (true, false, true),
            (true, true, false),
            (false, false, true),
            (true, true, false),
            (false, false, true),
        ];
        let participants = locale
            .sample_names()
            .into_iter()
            .zip(FLAGS)
            .map(|(name, (family, owner, mgmt))| {
                Participant::new(ids.next_id(), name, family, owner, mgmt)
            })
            .collect();
        Self { participants }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|participant| &participant.id == id)
    }

    /// New roster with `participant` appended.
    pub fn with_added(&self, participant: Participant) -> Self {
        let mut participants = self.participants.clone();
        participants.push(participant);
        Self { participants }
    }

    /// New roster without the participant `id`; unchanged copy when absent.
    pub fn without(&self, id: &ParticipantId) -> Self {
        Self {
            participants: self
                .participants
                .iter()
                .filter(|participant| &participant.id != id)
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
