//! Clinical priority scale.
//!
//! This module defines the fixed four-level classification assigned to every
//! patient at triage. Each level carries a human-readable display label (the
//! serialized form) and a numeric urgency weight used by queue ordering and
//! wait-time estimation.

use crate::error::{TriageError, TriageResult};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed urgency classifications.
///
/// Higher weight means more urgent. The scale is closed: callers can match
/// exhaustively over the four variants and the compiler will flag any missed
/// level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    /// "Emergência", weight 4.
    Emergency,
    /// "Muita Urgência", weight 3.
    HighUrgency,
    /// "Pouca Urgência", weight 2.
    LowUrgency,
    /// "Não Urgência", weight 1.
    NonUrgent,
}

impl Priority {
    /// The four levels in descending order of urgency.
    pub const ALL: [Priority; 4] = [
        Priority::Emergency,
        Priority::HighUrgency,
        Priority::LowUrgency,
        Priority::NonUrgent,
    ];

    /// Returns the numeric urgency weight for this level.
    ///
    /// Weights are strictly ordered and never equal: a higher weight always
    /// means a more urgent classification.
    pub fn weight(self) -> u8 {
        match self {
            Priority::Emergency => 4,
            Priority::HighUrgency => 3,
            Priority::LowUrgency => 2,
            Priority::NonUrgent => 1,
        }
    }

    /// Returns the display label for this level.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Emergency => "Emergência",
            Priority::HighUrgency => "Muita Urgência",
            Priority::LowUrgency => "Pouca Urgência",
            Priority::NonUrgent => "Não Urgência",
        }
    }

    /// Classifies a display label into its priority level.
    ///
    /// The label is trimmed and matched case-insensitively against the four
    /// known display labels.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidPriorityLabel`] when the label matches
    /// none of the levels; the error message enumerates the accepted labels.
    pub fn from_label(label: &str) -> TriageResult<Self> {
        let wanted = label.trim().to_lowercase();
        Priority::ALL
            .iter()
            .copied()
            .find(|level| level.label().to_lowercase() == wanted)
            .ok_or_else(|| TriageError::InvalidPriorityLabel(label.trim().to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl serde::Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Priority::from_label(&s).map_err(serde::de::Error::custom)
    }
}
