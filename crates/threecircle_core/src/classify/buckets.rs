//! Region buckets and the classifier.

use crate::model::participant::Participant;
use crate::model::region::Region;

/// Seven disjoint participant lists, one per [`Region`].
///
/// A derived projection: rebuild it with [`classify`] whenever the roster
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketSet {
    buckets: [Vec<Participant>; 7],
}

impl BucketSet {
    /// Participants of one region, in input order.
    pub fn get(&self, region: Region) -> &[Participant] {
        &self.buckets[region.index()]
    }

    pub fn len(&self, region: Region) -> usize {
        self.buckets[region.index()].len()
    }

    /// Display names of one region, in input order.
    pub fn names(&self, region: Region) -> Vec<&str> {
        self.get(region)
            .iter()
            .map(|participant| participant.name.as_str())
            .collect()
    }

    /// Total number of participants placed in any region.
    pub fn placed_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` when no region holds a participant.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Buckets in canonical region order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &[Participant])> + '_ {
        Region::ALL
            .into_iter()
            .map(move |region| (region, self.get(region)))
    }
}

/// Partitions participants into region buckets.
///
/// Participants without any flag are left out of every bucket.
pub fn classify(participants: &[Participant]) -> BucketSet {
    let mut set = BucketSet::default();
    for participant in participants {
        if let Some(region) = participant.region() {
            set.buckets[region.index()].push(participant.clone());
        }
    }
    set
}
