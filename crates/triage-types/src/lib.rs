/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when creating a [`NationalId`].
#[derive(Debug, thiserror::Error)]
pub enum NationalIdError {
    /// The input was empty or contained only whitespace
    #[error("National identifier cannot be empty")]
    Empty,
    /// The input contained interior whitespace or line breaks
    #[error("National identifier cannot contain whitespace")]
    Whitespace,
}

/// A patient's national identifier (e.g. a CPF number).
///
/// The identifier is the external lookup key for patient records. This type
/// guarantees the value is trimmed, non-empty, and free of interior
/// whitespace. It applies no country-specific format or checksum rules;
/// uniqueness across records is enforced by the patient store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Creates a new `NationalId` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. The trimmed
    /// value must be non-empty and must not contain whitespace or line
    /// breaks.
    ///
    /// # Errors
    ///
    /// Returns `NationalIdError::Empty` for empty/whitespace-only input, or
    /// `NationalIdError::Whitespace` if the trimmed value contains interior
    /// whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, NationalIdError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NationalIdError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(NationalIdError::Whitespace);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NationalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NationalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NationalId::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod national_id_tests {
    use super::*;

    #[test]
    fn accepts_trimmed_identifier() {
        let id = NationalId::new("  123.456.789-00  ").expect("valid identifier");
        assert_eq!(id.as_str(), "123.456.789-00");
    }

    #[test]
    fn rejects_empty_input() {
        let err = NationalId::new("   ").expect_err("expected validation failure");
        assert!(matches!(err, NationalIdError::Empty));
    }

    #[test]
    fn rejects_interior_whitespace() {
        let err = NationalId::new("123 456").expect_err("expected validation failure");
        assert!(matches!(err, NationalIdError::Whitespace));
    }
}
