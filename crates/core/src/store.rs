//! File-backed patient store.
//!
//! Persists one JSON document per patient under a sharded directory
//! structure:
//!
//! ```text
//! <patient_data_dir>/patients/
//!   <s1>/
//!     <s2>/
//!       <record-id>/
//!         patient.json
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the record
//! identifier, providing scalable directory sharding.
//!
//! The store is the sole owner of patient lifetime and identity: it assigns
//! record identifiers, enforces national-identifier uniqueness, and preserves
//! the triage timestamp across updates. The ordering and estimation logic
//! only ever reads snapshots produced by [`PatientStore::list`].

use crate::config::CoreConfig;
use crate::constants::PATIENT_JSON_FILENAME;
use crate::error::{TriageError, TriageResult};
use crate::patient::{NewPatient, Patient, PatientUpdate};
use crate::record_id::RecordId;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use triage_types::NationalId;

/// Persistence for patient records - no ordering or estimation concerns.
#[derive(Clone)]
pub struct PatientStore {
    cfg: Arc<CoreConfig>,
}

impl PatientStore {
    /// Creates a new store over the configured patient data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Registers a new patient.
    ///
    /// Assigns a fresh record identifier and defaults the triage timestamp to
    /// the registration instant when the caller did not supply one.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::DuplicateNationalId`] if another record already
    /// holds the national identifier, or a storage error if the record cannot
    /// be written.
    pub fn register(&self, new_patient: NewPatient) -> TriageResult<Patient> {
        if self.find_by_national_id(&new_patient.national_id)?.is_some() {
            return Err(TriageError::DuplicateNationalId(
                new_patient.national_id.to_string(),
            ));
        }

        let patient = Patient {
            id: RecordId::new(),
            name: new_patient.name,
            age: new_patient.age,
            national_id: new_patient.national_id,
            symptoms: new_patient.symptoms,
            priority: new_patient.priority,
            vitals: new_patient.vitals,
            triaged_at: new_patient.triaged_at.unwrap_or_else(Utc::now),
        };

        self.write(&patient)?;
        Ok(patient)
    }

    /// Lists all patient records from the file system.
    ///
    /// Traverses the sharded directory structure and reads every
    /// `patient.json` it finds. If an individual patient file cannot be
    /// parsed, it is logged as a warning and skipped.
    pub fn list(&self) -> Vec<Patient> {
        let patients_dir = self.cfg.patients_dir();

        let mut patients = Vec::new();

        let s1_iter = match fs::read_dir(&patients_dir) {
            Ok(it) => it,
            Err(_) => return patients,
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };

            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };

                for id_ent in id_iter.flatten() {
                    let id_path = id_ent.path();
                    if !id_path.is_dir() {
                        continue;
                    }

                    let record_path = id_path.join(PATIENT_JSON_FILENAME);
                    if !record_path.is_file() {
                        continue;
                    }

                    if let Ok(contents) = fs::read_to_string(&record_path) {
                        match serde_json::from_str::<Patient>(&contents) {
                            Ok(patient) => patients.push(patient),
                            Err(_) => {
                                tracing::warn!(
                                    "failed to parse patient record: {}",
                                    record_path.display()
                                );
                            }
                        }
                    }
                }
            }
        }

        patients
    }

    /// Looks up a patient by national identifier.
    pub fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> TriageResult<Option<Patient>> {
        Ok(self
            .list()
            .into_iter()
            .find(|p| p.national_id == *national_id))
    }

    /// Loads a patient record by its record identifier.
    pub fn load(&self, id: &RecordId) -> TriageResult<Option<Patient>> {
        let record_path = self.patient_dir(id).join(PATIENT_JSON_FILENAME);
        if !record_path.is_file() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&record_path).map_err(TriageError::FileRead)?;
        let patient =
            serde_json::from_str::<Patient>(&contents).map_err(TriageError::Deserialization)?;
        Ok(Some(patient))
    }

    /// Applies an update to an existing patient record.
    ///
    /// The record identifier and the triage timestamp are preserved from the
    /// stored record; a mutation never resets when the patient entered the
    /// waiting population.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] if no record exists for `id`,
    /// or [`TriageError::DuplicateNationalId`] if the update would move the
    /// national identifier onto one held by another record.
    pub fn update(&self, id: &RecordId, update: PatientUpdate) -> TriageResult<Patient> {
        let existing = self
            .load(id)?
            .ok_or_else(|| TriageError::PatientNotFound(id.to_string()))?;

        if update.national_id != existing.national_id {
            if let Some(other) = self.find_by_national_id(&update.national_id)? {
                if other.id != existing.id {
                    return Err(TriageError::DuplicateNationalId(
                        update.national_id.to_string(),
                    ));
                }
            }
        }

        let patient = Patient {
            id: existing.id,
            name: update.name,
            age: update.age,
            national_id: update.national_id,
            symptoms: update.symptoms,
            priority: update.priority,
            vitals: update.vitals,
            triaged_at: existing.triaged_at,
        };

        self.write(&patient)?;
        Ok(patient)
    }

    /// Removes a patient record by national identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] if no record holds the
    /// identifier.
    pub fn remove_by_national_id(&self, national_id: &NationalId) -> TriageResult<()> {
        let patient = self
            .find_by_national_id(national_id)?
            .ok_or_else(|| TriageError::PatientNotFound(national_id.to_string()))?;

        fs::remove_dir_all(self.patient_dir(&patient.id)).map_err(TriageError::FileRemove)
    }

    fn patient_dir(&self, id: &RecordId) -> PathBuf {
        id.sharded_dir(&self.cfg.patients_dir())
    }

    fn write(&self, patient: &Patient) -> TriageResult<()> {
        let dir = self.patient_dir(&patient.id);
        fs::create_dir_all(&dir).map_err(TriageError::PatientDirCreation)?;

        let contents =
            serde_json::to_string_pretty(patient).map_err(TriageError::Serialization)?;
        fs::write(dir.join(PATIENT_JSON_FILENAME), contents).map_err(TriageError::FileWrite)
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use crate::patient::VitalSigns;
    use crate::priority::Priority;
    use chrono::{DateTime, Utc};
    use triage_types::NonEmptyText;

    fn test_store(dir: &tempfile::TempDir) -> PatientStore {
        let cfg = CoreConfig::new(dir.path().to_path_buf(), 15.0).expect("valid config");
        PatientStore::new(Arc::new(cfg))
    }

    fn new_patient(national_id: &str, priority: Priority) -> NewPatient {
        NewPatient {
            name: NonEmptyText::new("Test Patient").expect("valid name"),
            age: 40,
            national_id: NationalId::new(national_id).expect("valid identifier"),
            symptoms: Some("dor de cabeça".into()),
            priority,
            vitals: VitalSigns {
                systolic_pressure: Some(120.0),
                diastolic_pressure: Some(80.0),
                heart_rate: Some(72.0),
                temperature: Some(36.6),
            },
            triaged_at: None,
        }
    }

    #[test]
    fn register_then_list_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        let registered = store
            .register(new_patient("11122233344", Priority::Emergency))
            .expect("registration succeeds");

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, registered.id);
        assert_eq!(listed[0].national_id.as_str(), "11122233344");
        assert_eq!(listed[0].priority, Priority::Emergency);
        assert_eq!(listed[0].triaged_at, registered.triaged_at);
    }

    #[test]
    fn register_rejects_duplicate_national_id() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        store
            .register(new_patient("11122233344", Priority::Emergency))
            .expect("first registration succeeds");
        let err = store
            .register(new_patient("11122233344", Priority::NonUrgent))
            .expect_err("duplicate identifier is rejected");

        assert!(matches!(err, TriageError::DuplicateNationalId(_)));
    }

    #[test]
    fn register_honours_a_supplied_triage_timestamp() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        let triaged_at =
            DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let mut patient = new_patient("11122233344", Priority::LowUrgency);
        patient.triaged_at = Some(triaged_at);

        let registered = store.register(patient).expect("registration succeeds");
        assert_eq!(registered.triaged_at, triaged_at);
    }

    #[test]
    fn update_preserves_the_triage_timestamp() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        let registered = store
            .register(new_patient("11122233344", Priority::LowUrgency))
            .expect("registration succeeds");

        let updated = store
            .update(
                &registered.id,
                PatientUpdate {
                    name: NonEmptyText::new("Renamed Patient").expect("valid name"),
                    age: 41,
                    national_id: registered.national_id.clone(),
                    symptoms: None,
                    priority: Priority::Emergency,
                    vitals: VitalSigns::default(),
                },
            )
            .expect("update succeeds");

        assert_eq!(updated.triaged_at, registered.triaged_at);
        assert_eq!(updated.priority, Priority::Emergency);
        assert_eq!(updated.name.as_str(), "Renamed Patient");

        let reloaded = store
            .load(&registered.id)
            .expect("load succeeds")
            .expect("record exists");
        assert_eq!(reloaded.triaged_at, registered.triaged_at);
    }

    #[test]
    fn update_rejects_stealing_another_records_national_id() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        store
            .register(new_patient("11122233344", Priority::Emergency))
            .expect("first registration succeeds");
        let second = store
            .register(new_patient("55566677788", Priority::NonUrgent))
            .expect("second registration succeeds");

        let err = store
            .update(
                &second.id,
                PatientUpdate {
                    name: second.name.clone(),
                    age: second.age,
                    national_id: NationalId::new("11122233344").expect("valid identifier"),
                    symptoms: None,
                    priority: second.priority,
                    vitals: second.vitals,
                },
            )
            .expect_err("identifier collision is rejected");

        assert!(matches!(err, TriageError::DuplicateNationalId(_)));
    }

    #[test]
    fn update_of_missing_record_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        let err = store
            .update(
                &RecordId::new(),
                PatientUpdate {
                    name: NonEmptyText::new("Nobody").expect("valid name"),
                    age: 1,
                    national_id: NationalId::new("00000000000").expect("valid identifier"),
                    symptoms: None,
                    priority: Priority::NonUrgent,
                    vitals: VitalSigns::default(),
                },
            )
            .expect_err("missing record is rejected");

        assert!(matches!(err, TriageError::PatientNotFound(_)));
    }

    #[test]
    fn remove_deletes_the_record() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        let registered = store
            .register(new_patient("11122233344", Priority::Emergency))
            .expect("registration succeeds");
        let national_id = registered.national_id.clone();

        store
            .remove_by_national_id(&national_id)
            .expect("removal succeeds");

        assert!(store.list().is_empty());
        let err = store
            .remove_by_national_id(&national_id)
            .expect_err("second removal fails");
        assert!(matches!(err, TriageError::PatientNotFound(_)));
    }

    #[test]
    fn list_skips_corrupt_records() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = test_store(&dir);

        let registered = store
            .register(new_patient("11122233344", Priority::Emergency))
            .expect("registration succeeds");

        let corrupt_dir = RecordId::new().sharded_dir(&store.cfg.patients_dir());
        fs::create_dir_all(&corrupt_dir).expect("create corrupt dir");
        fs::write(corrupt_dir.join(PATIENT_JSON_FILENAME), "not json").expect("write corrupt");

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, registered.id);
    }
}
