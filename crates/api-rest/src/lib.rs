//! # API REST
//!
//! REST API implementation for the triage queue system.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and utilities. The router built by
//! [`app`] is served both by the workspace's main `triage-run` binary and by
//! the standalone `triage-api-rest` binary.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    dto, HealthService, ListPatientsRes, PatientRes, RegisterPatientReq, UpdatePatientReq,
    WaitEstimateRes,
};
use triage_core::{
    NewPatient, Patient, PatientService, PatientUpdate, Priority, RecordId, TriageError,
    TriageResult, VitalSigns, WaitEstimate,
};
use triage_types::{NationalId, NonEmptyText};

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers,
/// including the PatientService instance for data operations.
#[derive(Clone)]
pub struct AppState {
    patient_service: PatientService,
}

impl AppState {
    pub fn new(patient_service: PatientService) -> Self {
        Self { patient_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        register_patient,
        find_patient,
        update_patient,
        remove_patient,
        estimate_wait,
    ),
    components(schemas(
        dto::HealthRes,
        dto::ListPatientsRes,
        dto::PatientRes,
        dto::RegisterPatientReq,
        dto::UpdatePatientReq,
        dto::WaitEstimateRes,
    ))
)]
struct ApiDoc;

/// Builds the REST router over the given application state.
///
/// Mounts every patient endpoint plus Swagger UI and a permissive CORS
/// layer.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients", post(register_patient))
        .route("/patients/national-id/:national_id", get(find_patient))
        .route("/patients/:id", put(update_patient))
        .route("/patients/national-id/:national_id", delete(remove_patient))
        .route(
            "/patients/national-id/:national_id/estimate/:caregivers",
            get(estimate_wait),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = dto::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the triage REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<dto::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "The waiting queue ordered by urgency, then arrival", body = ListPatientsRes)
    )
)]
/// The ordered waiting queue
///
/// Returns every waiting patient ordered for treatment: higher urgency
/// first, earlier triage among equals.
#[axum::debug_handler]
async fn list_patients(State(state): State<AppState>) -> Json<ListPatientsRes> {
    let patients = state
        .patient_service
        .waiting_queue()
        .into_iter()
        .map(to_patient_res)
        .collect();
    Json(ListPatientsRes { patients })
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = RegisterPatientReq,
    responses(
        (status = 201, description = "Patient registered", body = PatientRes),
        (status = 400, description = "Invalid priority label or field"),
        (status = 409, description = "National identifier already registered"),
        (status = 500, description = "Internal server error")
    )
)]
/// Register a new patient
///
/// Registers a patient into the waiting population. The priority field must
/// be one of the four display labels; the triage timestamp defaults to the
/// registration instant when omitted.
#[axum::debug_handler]
async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientReq>,
) -> Result<(StatusCode, Json<PatientRes>), (StatusCode, String)> {
    let new_patient = build_new_patient(req).map_err(error_response)?;

    match state.patient_service.register_patient(new_patient) {
        Ok(patient) => Ok((StatusCode::CREATED, Json(to_patient_res(patient)))),
        Err(e) => {
            tracing::error!("Register patient error: {:?}", e);
            Err(error_response(e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/patients/national-id/{national_id}",
    responses(
        (status = 200, description = "Patient found", body = PatientRes),
        (status = 400, description = "Invalid national identifier"),
        (status = 404, description = "Patient not found")
    )
)]
/// Look up a patient by national identifier
#[axum::debug_handler]
async fn find_patient(
    State(state): State<AppState>,
    AxumPath(national_id): AxumPath<String>,
) -> Result<Json<PatientRes>, (StatusCode, String)> {
    let national_id = parse_national_id(&national_id).map_err(error_response)?;

    match state.patient_service.find_by_national_id(&national_id) {
        Ok(Some(patient)) => Ok(Json(to_patient_res(patient))),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Patient not found".into())),
        Err(e) => {
            tracing::error!("Find patient error: {:?}", e);
            Err(error_response(e))
        }
    }
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    request_body = UpdatePatientReq,
    responses(
        (status = 200, description = "Patient updated", body = PatientRes),
        (status = 400, description = "Invalid record identifier or field"),
        (status = 404, description = "Patient not found"),
        (status = 409, description = "National identifier already registered"),
        (status = 500, description = "Internal server error")
    )
)]
/// Update a patient record
///
/// Applies the edited fields to an existing record. The record identifier
/// and the triage timestamp are preserved.
#[axum::debug_handler]
async fn update_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<UpdatePatientReq>,
) -> Result<Json<PatientRes>, (StatusCode, String)> {
    let id = RecordId::parse(&id).map_err(error_response)?;
    let update = build_patient_update(req).map_err(error_response)?;

    match state.patient_service.update_patient(&id, update) {
        Ok(patient) => Ok(Json(to_patient_res(patient))),
        Err(e) => {
            tracing::error!("Update patient error: {:?}", e);
            Err(error_response(e))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/patients/national-id/{national_id}",
    responses(
        (status = 204, description = "Patient removed"),
        (status = 400, description = "Invalid national identifier"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Remove a patient by national identifier
#[axum::debug_handler]
async fn remove_patient(
    State(state): State<AppState>,
    AxumPath(national_id): AxumPath<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let national_id = parse_national_id(&national_id).map_err(error_response)?;

    match state.patient_service.remove_by_national_id(&national_id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            tracing::error!("Remove patient error: {:?}", e);
            Err(error_response(e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/patients/national-id/{national_id}/estimate/{caregivers}",
    responses(
        (status = 200, description = "Wait-time estimate", body = WaitEstimateRes),
        (status = 400, description = "Invalid national identifier")
    )
)]
/// Estimate the wait time for a patient
///
/// Computes the estimated wait against the current ordered queue and the
/// given caregiver count. A patient who is not waiting or a non-positive
/// caregiver count is reported through the `outcome` field, not as an error
/// status.
#[axum::debug_handler]
async fn estimate_wait(
    State(state): State<AppState>,
    AxumPath((national_id, caregivers)): AxumPath<(String, i32)>,
) -> Result<Json<WaitEstimateRes>, (StatusCode, String)> {
    let national_id = parse_national_id(&national_id).map_err(error_response)?;

    let estimate = state.patient_service.estimate_wait(&national_id, caregivers);
    Ok(Json(to_estimate_res(estimate)))
}

fn error_response(err: TriageError) -> (StatusCode, String) {
    match err {
        TriageError::InvalidPriorityLabel(_) | TriageError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        TriageError::DuplicateNationalId(_) => (StatusCode::CONFLICT, err.to_string()),
        TriageError::PatientNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into()),
    }
}

fn parse_national_id(input: &str) -> TriageResult<NationalId> {
    NationalId::new(input)
        .map_err(|e| TriageError::InvalidInput(format!("invalid national identifier: {e}")))
}

fn build_new_patient(req: RegisterPatientReq) -> TriageResult<NewPatient> {
    let triaged_at = req.triaged_at.as_deref().map(parse_timestamp).transpose()?;

    Ok(NewPatient {
        name: parse_name(&req.name)?,
        age: req.age,
        national_id: parse_national_id(&req.national_id)?,
        symptoms: req.symptoms,
        priority: Priority::from_label(&req.priority)?,
        vitals: VitalSigns {
            systolic_pressure: req.systolic_pressure,
            diastolic_pressure: req.diastolic_pressure,
            heart_rate: req.heart_rate,
            temperature: req.temperature,
        },
        triaged_at,
    })
}

fn build_patient_update(req: UpdatePatientReq) -> TriageResult<PatientUpdate> {
    Ok(PatientUpdate {
        name: parse_name(&req.name)?,
        age: req.age,
        national_id: parse_national_id(&req.national_id)?,
        symptoms: req.symptoms,
        priority: Priority::from_label(&req.priority)?,
        vitals: VitalSigns {
            systolic_pressure: req.systolic_pressure,
            diastolic_pressure: req.diastolic_pressure,
            heart_rate: req.heart_rate,
            temperature: req.temperature,
        },
    })
}

fn parse_name(input: &str) -> TriageResult<NonEmptyText> {
    NonEmptyText::new(input)
        .map_err(|_| TriageError::InvalidInput("name cannot be empty".into()))
}

fn parse_timestamp(input: &str) -> TriageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TriageError::InvalidInput(format!("invalid RFC 3339 timestamp: '{input}'")))
}

fn to_patient_res(patient: Patient) -> PatientRes {
    PatientRes {
        id: patient.id.to_string(),
        name: patient.name.to_string(),
        age: patient.age,
        national_id: patient.national_id.to_string(),
        symptoms: patient.symptoms,
        priority: patient.priority.label().to_string(),
        systolic_pressure: patient.vitals.systolic_pressure,
        diastolic_pressure: patient.vitals.diastolic_pressure,
        heart_rate: patient.vitals.heart_rate,
        temperature: patient.vitals.temperature,
        triaged_at: patient.triaged_at.to_rfc3339(),
    }
}

fn to_estimate_res(estimate: WaitEstimate) -> WaitEstimateRes {
    match estimate {
        WaitEstimate::Queued { hours, minutes } => WaitEstimateRes {
            outcome: "queued".into(),
            hours: Some(hours),
            minutes: Some(minutes),
        },
        WaitEstimate::NotInQueue => WaitEstimateRes {
            outcome: "not_in_queue".into(),
            hours: None,
            minutes: None,
        },
        WaitEstimate::NoCaregivers => WaitEstimateRes {
            outcome: "no_caregivers".into(),
            hours: None,
            minutes: None,
        },
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    fn register_req(priority: &str) -> RegisterPatientReq {
        RegisterPatientReq {
            name: "Maria Silva".into(),
            age: 34,
            national_id: "11122233344".into(),
            symptoms: Some("febre alta".into()),
            priority: priority.into(),
            systolic_pressure: Some(120.0),
            diastolic_pressure: Some(80.0),
            heart_rate: Some(90.0),
            temperature: Some(39.2),
            triaged_at: Some("2024-05-01T12:30:00Z".into()),
        }
    }

    #[test]
    fn build_new_patient_translates_every_field() {
        let new_patient = build_new_patient(register_req("emergência")).expect("valid request");

        assert_eq!(new_patient.name.as_str(), "Maria Silva");
        assert_eq!(new_patient.priority, Priority::Emergency);
        assert_eq!(new_patient.vitals.temperature, Some(39.2));
        let triaged_at = new_patient.triaged_at.expect("timestamp supplied");
        assert_eq!(triaged_at.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn build_new_patient_rejects_unknown_priority() {
        let err = build_new_patient(register_req("Rotina")).expect_err("unknown label");
        assert!(matches!(err, TriageError::InvalidPriorityLabel(_)));
    }

    #[test]
    fn build_new_patient_rejects_bad_timestamp() {
        let mut req = register_req("Emergência");
        req.triaged_at = Some("yesterday".into());

        let err = build_new_patient(req).expect_err("bad timestamp");
        assert!(matches!(err, TriageError::InvalidInput(_)));
    }

    #[test]
    fn estimate_outcomes_map_to_wire_variants() {
        let queued = to_estimate_res(WaitEstimate::Queued {
            hours: 1,
            minutes: 5,
        });
        assert_eq!(queued.outcome, "queued");
        assert_eq!(queued.hours, Some(1));
        assert_eq!(queued.minutes, Some(5));

        let absent = to_estimate_res(WaitEstimate::NotInQueue);
        assert_eq!(absent.outcome, "not_in_queue");
        assert_eq!(absent.hours, None);

        let idle = to_estimate_res(WaitEstimate::NoCaregivers);
        assert_eq!(idle.outcome, "no_caregivers");
        assert_eq!(idle.minutes, None);
    }
}
