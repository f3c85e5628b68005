//! Constants used throughout the triage core crate.
//!
//! This module contains all path, filename and calibration constants to
//! ensure consistency across the codebase and make maintenance easier.

/// Directory name for patient records storage.
pub const PATIENTS_DIR_NAME: &str = "patients";

/// Default directory for patient data storage when no explicit directory is configured.
pub const DEFAULT_PATIENT_DATA_DIR: &str = "patient_data";

/// Filename for patient JSON files.
pub const PATIENT_JSON_FILENAME: &str = "patient.json";

/// Base service time per patient, in minutes.
///
/// This is the single calibration knob of the wait-time estimation model:
/// each patient ahead in the queue contributes this many minutes multiplied
/// by their own urgency weight. Override at startup via `TRIAGE_BASE_MINUTES`.
pub const DEFAULT_BASE_MINUTES_PER_PATIENT: f64 = 15.0;
