//! Advisory lines derived from bucket sizes.
//!
//! Lines follow a fixed priority (triple overlap, pair overlaps, singles),
//! never the insertion order of participants.

use crate::classify::buckets::BucketSet;
use crate::locale::Locale;
use crate::model::region::Region;
use serde::Serialize;

/// Emission order for region advisories.
pub const ADVISORY_PRIORITY: [Region; 7] = [
    Region::All,
    Region::OwnershipManagement,
    Region::FamilyManagement,
    Region::FamilyOwnership,
    Region::Management,
    Region::Ownership,
    Region::Family,
];

/// One advisory text line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    /// Region the line talks about; `None` for the empty-diagram fallback.
    pub region: Option<Region>,
    pub text: String,
}

/// Builds the advisory lines for a bucket set.
///
/// Emits one line per non-empty bucket, or exactly one fallback line when
/// every bucket is empty.
pub fn advisories(buckets: &BucketSet, locale: Locale) -> Vec<Advisory> {
    let lines: Vec<Advisory> = ADVISORY_PRIORITY
        .into_iter()
        .filter_map(|region| {
            let count = buckets.len(region);
            (count > 0).then(|| Advisory {
                region: Some(region),
                text: locale.advisory_line(region, count),
            })
        })
        .collect();

    if lines.is_empty() {
        return vec![Advisory {
            region: None,
            text: locale.fallback_advisory().to_string(),
        }];
    }
    lines
}

/// Closing disclaimer, present only when region advisories were emitted.
pub fn advisory_footer(buckets: &BucketSet, locale: Locale) -> Option<&'static str> {
    (!buckets.is_empty()).then(|| locale.advisory_disclaimer())
}
