//! # Triage Core
//!
//! Core business logic for the hospital triage queue system.
//!
//! This crate contains pure domain operations and file/folder management:
//! - The fixed four-level clinical priority scale
//! - Queue ordering by urgency, then arrival
//! - Wait-time estimation against a caregiver count
//! - Patient registration, lookup, update and removal with sharded JSON storage
//!
//! **No API concerns**: HTTP servers, OpenAPI documentation, or terminal interfaces belong in
//! `api-rest`, `api-shared`, or `cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod priority;
pub mod queue;
pub mod record_id;
pub mod service;
pub mod store;
pub mod wait_time;

pub use config::CoreConfig;
pub use error::{TriageError, TriageResult};
pub use patient::{NewPatient, Patient, PatientUpdate, VitalSigns};
pub use priority::Priority;
pub use queue::order_by_urgency;
pub use record_id::RecordId;
pub use service::PatientService;
pub use store::PatientStore;
pub use wait_time::{estimate_wait, WaitEstimate};
