//! Circles and the seven non-empty overlap regions of a three-set diagram.

use serde::{Deserialize, Serialize};

/// One of the three fixed attribute circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Circle {
    Family,
    Ownership,
    Management,
}

impl Circle {
    /// Circles in drawing order.
    pub const ALL: [Circle; 3] = [Circle::Family, Circle::Ownership, Circle::Management];

    /// Position in [`Circle::ALL`], used to index per-circle tables.
    pub fn index(self) -> usize {
        match self {
            Self::Family => 0,
            Self::Ownership => 1,
            Self::Management => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Ownership => "ownership",
            Self::Management => "management",
        }
    }
}

/// A non-empty subset of {Family, Ownership, Management}.
///
/// The empty subset has no variant: a participant with no flag set belongs
/// to no region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Family,
    Ownership,
    Management,
    FamilyOwnership,
    FamilyManagement,
    OwnershipManagement,
    All,
}

impl Region {
    /// Canonical order: singles, then pairs, then the triple overlap.
    pub const ALL: [Region; 7] = [
        Region::Family,
        Region::Ownership,
        Region::Management,
        Region::FamilyOwnership,
        Region::FamilyManagement,
        Region::OwnershipManagement,
        Region::All,
    ];

    /// Maps the ordered flag triple to its region.
    ///
    /// Arms run from "all three" down to "exactly one", so every triple hits
    /// exactly one arm.
    pub fn from_flags(family: bool, ownership: bool, management: bool) -> Option<Region> {
        match (family, ownership, management) {
            (true, true, true) => Some(Region::All),
            (true, true, false) => Some(Region::FamilyOwnership),
            (true, false, true) => Some(Region::FamilyManagement),
            (false, true, true) => Some(Region::OwnershipManagement),
            (true, false, false) => Some(Region::Family),
            (false, true, false) => Some(Region::Ownership),
            (false, false, true) => Some(Region::Management),
            (false, false, false) => None,
        }
    }

    /// Position in [`Region::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Family => 0,
            Self::Ownership => 1,
            Self::Management => 2,
            Self::FamilyOwnership => 3,
            Self::FamilyManagement => 4,
            Self::OwnershipManagement => 5,
            Self::All => 6,
        }
    }

    /// Member circles in drawing order.
    pub fn circles(self) -> &'static [Circle] {
        match self {
            Self::Family => &[Circle::Family],
            Self::Ownership => &[Circle::Ownership],
            Self::Management => &[Circle::Management],
            Self::FamilyOwnership => &[Circle::Family, Circle::Ownership],
            Self::FamilyManagement => &[Circle::Family, Circle::Management],
            Self::OwnershipManagement => &[Circle::Ownership, Circle::Management],
            Self::All => &[Circle::Family, Circle::Ownership, Circle::Management],
        }
    }

    pub fn contains(self, circle: Circle) -> bool {
        self.circles().contains(&circle)
    }

    /// Stable machine name, also used for SVG element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Ownership => "ownership",
            Self::Management => "management",
            Self::FamilyOwnership => "family_ownership",
            Self::FamilyManagement => "family_management",
            Self::OwnershipManagement => "ownership_management",
            Self::All => "all",
        }
    }
}
