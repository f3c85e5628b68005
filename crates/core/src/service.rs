//! Patient service and related types.
//!
//! This module provides the main service for patient operations, combining
//! the patient store with queue ordering and wait-time estimation for use by
//! the REST and CLI layers.

use crate::config::CoreConfig;
use crate::error::TriageResult;
use crate::patient::{NewPatient, Patient, PatientUpdate};
use crate::queue::order_by_urgency;
use crate::record_id::RecordId;
use crate::store::PatientStore;
use crate::wait_time::{estimate_wait, WaitEstimate};
use std::sync::Arc;
use triage_types::NationalId;

/// Pure patient data operations - no API concerns
#[derive(Clone)]
pub struct PatientService {
    cfg: Arc<CoreConfig>,
    store: PatientStore,
}

impl PatientService {
    /// Creates a new instance of PatientService.
    ///
    /// # Returns
    /// A new `PatientService` instance ready to handle patient operations.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let store = PatientStore::new(cfg.clone());
        Self { cfg, store }
    }

    /// Registers a new patient into the waiting population.
    ///
    /// # Errors
    ///
    /// Returns a `TriageError` if the national identifier is already
    /// registered or the record cannot be persisted.
    pub fn register_patient(&self, new_patient: NewPatient) -> TriageResult<Patient> {
        self.store.register(new_patient)
    }

    /// Lists all registered patients in storage order.
    pub fn list_patients(&self) -> Vec<Patient> {
        self.store.list()
    }

    /// Returns the waiting queue ordered by urgency, then arrival.
    pub fn waiting_queue(&self) -> Vec<Patient> {
        order_by_urgency(&self.store.list())
    }

    /// Looks up a patient by national identifier.
    pub fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> TriageResult<Option<Patient>> {
        self.store.find_by_national_id(national_id)
    }

    /// Applies an update to an existing patient record.
    ///
    /// The triage timestamp is preserved; see [`PatientStore::update`].
    pub fn update_patient(&self, id: &RecordId, update: PatientUpdate) -> TriageResult<Patient> {
        self.store.update(id, update)
    }

    /// Removes a patient by national identifier.
    pub fn remove_by_national_id(&self, national_id: &NationalId) -> TriageResult<()> {
        self.store.remove_by_national_id(national_id)
    }

    /// Estimates the wait time for a patient given the available caregivers.
    ///
    /// Orders a fresh snapshot of the waiting population and estimates using
    /// the configured base minutes per patient. Absent patients and
    /// non-positive caregiver counts are reported as
    /// [`WaitEstimate::NotInQueue`] and [`WaitEstimate::NoCaregivers`], never
    /// as errors.
    pub fn estimate_wait(&self, national_id: &NationalId, caregivers: i32) -> WaitEstimate {
        estimate_wait(
            national_id,
            &self.waiting_queue(),
            caregivers,
            self.cfg.base_minutes_per_patient(),
        )
    }
}
