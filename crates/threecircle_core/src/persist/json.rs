//! Participant JSON import/export with per-record coercion.
//!
//! # Invariants
//! - Only whole-document failures (invalid JSON, non-array top level) are
//!   errors; a malformed record is coerced to safe defaults, never dropped.
//! - Imported ids are unique within the result; repeats get fresh ids.
//! - Coercion diagnostics never carry user text.

use crate::locale::Locale;
use crate::model::id::{IdGenerator, ParticipantId};
use crate::model::participant::{normalize_name, Participant};
use log::warn;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field of an imported record that needed a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercedField {
    /// The record itself was not a JSON object.
    Record,
    Id,
    DuplicateId,
    Name,
    Family,
    Owner,
    Management,
}

impl CoercedField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Id => "id",
            Self::DuplicateId => "duplicate_id",
            Self::Name => "name",
            Self::Family => "family",
            Self::Owner => "owner",
            Self::Management => "mgmt",
        }
    }
}

/// One coercion applied while importing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coercion {
    /// Zero-based position of the record in the imported array.
    pub index: usize,
    pub field: CoercedField,
}

/// Import result: the coerced participants plus what was defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub participants: Vec<Participant>,
    pub coercions: Vec<Coercion>,
}

/// Whole-document persistence failures.
#[derive(Debug)]
pub enum PersistError {
    /// Text is not valid JSON.
    Parse(serde_json::Error),
    /// Top-level value is not an array of records.
    NotAnArray { found: &'static str },
    Serialize(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "participant file is not valid JSON: {err}"),
            Self::NotAnArray { found } => {
                write!(f, "participant file must hold a JSON array, found {found}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize participants: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) | Self::Serialize(err) => Some(err),
            Self::NotAnArray { .. } => None,
        }
    }
}

/// Serializes participants as a pretty-printed JSON array.
pub fn export_participants(participants: &[Participant]) -> Result<String, PersistError> {
    serde_json::to_string_pretty(participants).map_err(PersistError::Serialize)
}

/// Parses a participant array, coercing malformed records.
///
/// # Errors
/// - `PersistError::Parse` when `text` is not JSON.
/// - `PersistError::NotAnArray` when the top-level value is not an array.
pub fn import_participants(
    text: &str,
    ids: &mut dyn IdGenerator,
    locale: Locale,
) -> Result<ImportReport, PersistError> {
    let value: Value = serde_json::from_str(text).map_err(PersistError::Parse)?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(PersistError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let empty = Map::new();
    let mut seen = HashSet::new();
    let mut coercions = Vec::new();
    let mut participants = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let mut note = |field| coercions.push(Coercion { index, field });
        let fields = match record.as_object() {
            Some(fields) => fields,
            None => {
                note(CoercedField::Record);
                &empty
            }
        };

        let mut id = match fields.get("id").and_then(scalar_text) {
            Some(id) => ParticipantId::new(id),
            None => {
                note(CoercedField::Id);
                ids.next_id()
            }
        };
        while !seen.insert(id.clone()) {
            note(CoercedField::DuplicateId);
            id = ids.next_id();
        }

        let name = match fields
            .get("name")
            .and_then(scalar_text)
            .map(|raw| normalize_name(&raw))
            .filter(|name| !name.is_empty())
        {
            Some(name) => name,
            None => {
                note(CoercedField::Name);
                locale.placeholder_name().to_string()
            }
        };

        let mut flag = |key: &str, field: CoercedField| match fields.get(key) {
            Some(Value::Bool(set)) => *set,
            other => {
                note(field);
                other.map(is_truthy).unwrap_or(false)
            }
        };
        let in_family = flag("family", CoercedField::Family);
        let is_owner = flag("owner", CoercedField::Owner);
        let in_management = flag("mgmt", CoercedField::Management);

        participants.push(Participant::new(
            id,
            name,
            in_family,
            is_owner,
            in_management,
        ));
    }

    for coercion in &coercions {
        warn!(
            "event=import_coerce module=persist status=degraded index={} field={}",
            coercion.index,
            coercion.field.as_str()
        );
    }

    Ok(ImportReport {
        participants,
        coercions,
    })
}

/// Text form of a string or number; empty strings count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Truthiness of a loosely typed flag: `null`, `false`, `0` and `""` are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
