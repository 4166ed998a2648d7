//! Participant domain model.
//!
//! # Responsibility
//! - Define the record placed into the diagram and its JSON wire shape.
//! - Validate raw drafts coming from the input-collection layer.
//!
//! # Invariants
//! - `id` is stable for the participant lifetime and never reused.
//! - A participant built from a draft has a non-empty, trimmed name and at
//!   least one attribute flag set.
//! - Imported participants may carry all-false flags; they are kept in the
//!   roster but belong to no region.

use crate::model::id::{IdGenerator, ParticipantId};
use crate::model::region::{Circle, Region};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One named person tagged with the three circle attributes.
///
/// Serialized with the short field names used by exported data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(rename = "family")]
    pub in_family: bool,
    #[serde(rename = "owner")]
    pub is_owner: bool,
    #[serde(rename = "mgmt")]
    pub in_management: bool,
}

impl Participant {
    /// Creates a participant with a caller-provided id.
    ///
    /// Used by import and sample paths; does not validate the name.
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        in_family: bool,
        is_owner: bool,
        in_management: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            in_family,
            is_owner,
            in_management,
        }
    }

    /// Region this participant is drawn in, or `None` when no flag is set.
    pub fn region(&self) -> Option<Region> {
        Region::from_flags(self.in_family, self.is_owner, self.in_management)
    }

    /// Number of attribute flags set (0..=3).
    pub fn attribute_count(&self) -> usize {
        [self.in_family, self.is_owner, self.in_management]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }

    pub fn has(&self, circle: Circle) -> bool {
        match circle {
            Circle::Family => self.in_family,
            Circle::Ownership => self.is_owner,
            Circle::Management => self.in_management,
        }
    }
}

/// Unvalidated participant input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantDraft {
    pub name: String,
    pub in_family: bool,
    pub is_owner: bool,
    pub in_management: bool,
}

impl ParticipantDraft {
    pub fn new(
        name: impl Into<String>,
        in_family: bool,
        is_owner: bool,
        in_management: bool,
    ) -> Self {
        Self {
            name: name.into(),
            in_family,
            is_owner,
            in_management,
        }
    }

    /// Checks draft invariants and returns the normalized display name.
    ///
    /// # Errors
    /// - `InputError::EmptyName` when the name is blank after trimming.
    /// - `InputError::NoAttributes` when no flag is set.
    pub fn validate(&self) -> Result<String, InputError> {
        let name = normalize_name(&self.name);
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        if !(self.in_family || self.is_owner || self.in_management) {
            return Err(InputError::NoAttributes);
        }
        Ok(name)
    }

    /// Validates the draft and allocates an id for which `taken` is false.
    pub fn into_participant(
        self,
        ids: &mut dyn IdGenerator,
        taken: &dyn Fn(&ParticipantId) -> bool,
    ) -> Result<Participant, InputError> {
        let name = self.validate()?;
        Ok(Participant::new(
            ids.next_unused(taken),
            name,
            self.in_family,
            self.is_owner,
            self.in_management,
        ))
    }
}

/// Rejection reasons for participant drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Name is empty or whitespace only.
    EmptyName,
    /// None of family/ownership/management is selected.
    NoAttributes,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "participant name must not be empty"),
            Self::NoAttributes => write!(
                f,
                "participant must belong to at least one of family, ownership or management"
            ),
        }
    }
}

impl Error for InputError {}

/// Trims and collapses inner whitespace runs to a single space.
pub fn normalize_name(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, InputError, ParticipantDraft};

    #[test]
    fn normalize_name_collapses_whitespace() {
        assert_eq!(normalize_name("  山田\u{3000} 太郎 \n"), "山田 太郎");
        assert_eq!(normalize_name("\t \n"), "");
    }

    #[test]
    fn validate_reports_empty_name_before_flags() {
        let draft = ParticipantDraft::new("   ", false, false, false);
        assert_eq!(draft.validate(), Err(InputError::EmptyName));
    }

    #[test]
    fn validate_rejects_draft_without_attributes() {
        let draft = ParticipantDraft::new("CFO", false, false, false);
        assert_eq!(draft.validate(), Err(InputError::NoAttributes));
    }
}
