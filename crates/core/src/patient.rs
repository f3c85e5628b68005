//! Patient record data model.
//!
//! A patient is one person awaiting care. The record is owned by the patient
//! store; the ordering and estimation logic only reads immutable snapshots of
//! these records and never mutates them.

use crate::priority::Priority;
use crate::record_id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use triage_types::{NationalId, NonEmptyText};

/// The four vital-sign readings captured at triage.
///
/// All readings are optional and stored exactly as supplied; the core applies
/// no range validation to them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Systolic blood pressure (mmHg).
    pub systolic_pressure: Option<f64>,
    /// Diastolic blood pressure (mmHg).
    pub diastolic_pressure: Option<f64>,
    /// Heart rate (beats per minute).
    pub heart_rate: Option<f64>,
    /// Body temperature (°C).
    pub temperature: Option<f64>,
}

/// One person awaiting care.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Patient {
    /// Unique record identifier, assigned by the store at registration.
    pub id: RecordId,
    /// Patient's full name.
    pub name: NonEmptyText,
    /// Age in years.
    pub age: u32,
    /// Unique national identifier, the external lookup key.
    pub national_id: NationalId,
    /// Free-text symptom description.
    #[serde(default)]
    pub symptoms: Option<String>,
    /// Assigned priority level.
    pub priority: Priority,
    /// Vital signs captured at triage.
    #[serde(default)]
    pub vitals: VitalSigns,
    /// The moment the patient entered the waiting population.
    ///
    /// Set once at registration and never reassigned implicitly; updates to
    /// other fields preserve it.
    pub triaged_at: DateTime<Utc>,
}

/// Fields supplied by a caller registering a new patient.
///
/// The record identifier is assigned by the store. When `triaged_at` is not
/// supplied, it defaults to the registration instant.
#[derive(Clone, Debug)]
pub struct NewPatient {
    pub name: NonEmptyText,
    pub age: u32,
    pub national_id: NationalId,
    pub symptoms: Option<String>,
    pub priority: Priority,
    pub vitals: VitalSigns,
    pub triaged_at: Option<DateTime<Utc>>,
}

/// Editable fields for a patient update.
///
/// The record identifier and the triage timestamp are never part of an
/// update; both are preserved from the stored record.
#[derive(Clone, Debug)]
pub struct PatientUpdate {
    pub name: NonEmptyText,
    pub age: u32,
    pub national_id: NationalId,
    pub symptoms: Option<String>,
    pub priority: Priority,
    pub vitals: VitalSigns,
}
