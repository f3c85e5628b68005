//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::{DEFAULT_BASE_MINUTES_PER_PATIENT, PATIENTS_DIR_NAME};
use crate::error::{TriageError, TriageResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_data_dir: PathBuf,
    base_minutes_per_patient: f64,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `base_minutes_per_patient` is the wait-time calibration knob; it must
    /// be a finite, positive number of minutes.
    pub fn new(patient_data_dir: PathBuf, base_minutes_per_patient: f64) -> TriageResult<Self> {
        if !base_minutes_per_patient.is_finite() || base_minutes_per_patient <= 0.0 {
            return Err(TriageError::InvalidInput(
                "base minutes per patient must be a positive number".into(),
            ));
        }

        Ok(Self {
            patient_data_dir,
            base_minutes_per_patient,
        })
    }

    pub fn patient_data_dir(&self) -> &Path {
        &self.patient_data_dir
    }

    pub fn patients_dir(&self) -> PathBuf {
        self.patient_data_dir.join(PATIENTS_DIR_NAME)
    }

    pub fn base_minutes_per_patient(&self) -> f64 {
        self.base_minutes_per_patient
    }
}

/// Parse the base minutes per patient from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default calibration
/// constant.
pub fn base_minutes_from_env_value(value: Option<String>) -> TriageResult<f64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_BASE_MINUTES_PER_PATIENT),
        Some(v) => {
            let minutes = v.parse::<f64>().map_err(|_| {
                TriageError::InvalidInput(format!("invalid base minutes value: '{v}'"))
            })?;
            if !minutes.is_finite() || minutes <= 0.0 {
                return Err(TriageError::InvalidInput(format!(
                    "base minutes must be a positive number, got: '{v}'"
                )));
            }
            Ok(minutes)
        }
    }
}
