//! Record identity and sharded-path utilities.
//!
//! Patient records are stored under sharded directories derived from a UUID.
//!
//! To keep path derivation deterministic and consistent across the codebase, the store uses a
//! *canonical* UUID representation for record identifiers: **32 lowercase hexadecimal
//! characters** (no hyphens).
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Notes:
//! - This is the same value you would get from `Uuid::new_v4().simple().to_string()`.
//! - Canonical form is *required* for externally supplied identifiers (for example, from CLI/API
//!   inputs). Use [`RecordId::parse`] to validate an input string.
//! - Non-canonical values (uppercase, hyphenated, wrong length, non-hex) are rejected.
//!
//! ## Sharded directory layout
//! For a canonical identifier `u`, records live under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `patient_data/patients/55/0e/550e8400e29b41d4a716446655440000/`
//!
//! This scheme prevents very large fan-out in a single directory.

use crate::error::{TriageError, TriageResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A patient record identifier in canonical form (32 lowercase hex characters, no hyphens).
///
/// This wrapper type guarantees that once constructed, the contained UUID is canonical. It
/// provides type safety for identifier operations and ensures consistent path derivation
/// across the system.
///
/// # Construction
/// - [`RecordId::new`] generates a fresh identifier (for new patient records).
/// - [`RecordId::parse`] validates an externally supplied identifier.
///
/// # Errors
/// [`RecordId::parse`] returns [`TriageError::InvalidInput`] if the input is not already
/// canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a new identifier in canonical form.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates an externally supplied identifier string.
    ///
    /// The input must already be in canonical form: 32 lowercase hexadecimal characters with
    /// no hyphens. Uppercase, hyphenated, or otherwise non-canonical values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidInput`] if the input is not canonical.
    pub fn parse(input: &str) -> TriageResult<Self> {
        let canonical = input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !canonical {
            return Err(TriageError::InvalidInput(format!(
                "record identifier must be 32 lowercase hex characters: '{input}'"
            )));
        }

        let uuid = Uuid::parse_str(input).map_err(|_| {
            TriageError::InvalidInput(format!("record identifier is not a valid UUID: '{input}'"))
        })?;

        Ok(Self(uuid))
    }

    /// Returns the directory for this record inside `parent_dir`, using the sharded layout
    /// `parent_dir/<s1>/<s2>/<id>` where `s1`/`s2` are the first four hex characters.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let id = self.0.simple().to_string();
        parent_dir.join(&id[0..2]).join(&id[2..4]).join(&id)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod record_id_tests {
    use super::*;

    #[test]
    fn new_produces_canonical_form() {
        let id = RecordId::new().to_string();

        assert_eq!(id.len(), 32);
        assert!(id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn parse_accepts_canonical_identifier() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").expect("canonical id");
        assert_eq!(id.to_string(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn parse_rejects_hyphenated_identifier() {
        let result = RecordId::parse("550e8400-e29b-41d4-a716-446655440000");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_uppercase_identifier() {
        let result = RecordId::parse("550E8400E29B41D4A716446655440000");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let result = RecordId::parse("550e8400");
        assert!(result.is_err());
    }

    #[test]
    fn sharded_dir_uses_first_four_hex_characters() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").expect("canonical id");
        let dir = id.sharded_dir(Path::new("patients"));

        assert_eq!(
            dir,
            Path::new("patients/55/0e/550e8400e29b41d4a716446655440000")
        );
    }

    #[test]
    fn round_trip_new_to_string_to_parse() {
        let original = RecordId::new();
        let parsed = RecordId::parse(&original.to_string()).expect("round trip");

        assert_eq!(original, parsed);
    }
}
