//! Request and response types for the REST surface.
//!
//! These are wire-shape types only: priority levels travel as display
//! labels and timestamps as RFC 3339 strings. Translation to and from the
//! core domain types happens in the `api-rest` handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A patient record as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientRes {
    /// Record identifier (32 lowercase hex characters).
    pub id: String,
    pub name: String,
    pub age: u32,
    pub national_id: String,
    pub symptoms: Option<String>,
    /// Priority display label, e.g. "Emergência".
    pub priority: String,
    pub systolic_pressure: Option<f64>,
    pub diastolic_pressure: Option<f64>,
    pub heart_rate: Option<f64>,
    pub temperature: Option<f64>,
    /// RFC 3339 triage timestamp.
    pub triaged_at: String,
}

/// Request body for registering a patient.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterPatientReq {
    pub name: String,
    pub age: u32,
    pub national_id: String,
    #[serde(default)]
    pub symptoms: Option<String>,
    /// Priority display label; matched case-insensitively.
    pub priority: String,
    #[serde(default)]
    pub systolic_pressure: Option<f64>,
    #[serde(default)]
    pub diastolic_pressure: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Optional RFC 3339 triage timestamp; defaults to the registration
    /// instant when omitted.
    #[serde(default)]
    pub triaged_at: Option<String>,
}

/// Request body for updating a patient.
///
/// The record identifier comes from the request path and the triage
/// timestamp is never editable.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePatientReq {
    pub name: String,
    pub age: u32,
    pub national_id: String,
    #[serde(default)]
    pub symptoms: Option<String>,
    pub priority: String,
    #[serde(default)]
    pub systolic_pressure: Option<f64>,
    #[serde(default)]
    pub diastolic_pressure: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// The ordered waiting queue.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListPatientsRes {
    pub patients: Vec<PatientRes>,
}

/// Wait-time estimation response.
///
/// `outcome` is one of `"queued"`, `"not_in_queue"` or `"no_caregivers"`;
/// `hours` and `minutes` are present only for `"queued"`. Callers branch on
/// the outcome rather than receiving an error status.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WaitEstimateRes {
    pub outcome: String,
    #[serde(default)]
    pub hours: Option<u64>,
    #[serde(default)]
    pub minutes: Option<u64>,
}
