use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use triage_core::{config::base_minutes_from_env_value, CoreConfig, PatientService};

/// Main entry point for the triage queue application
///
/// Starts the REST server with OpenAPI/Swagger documentation and open access
/// to patient operations.
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PATIENT_DATA_DIR`: Directory for patient data storage (default: "patient_data")
/// - `TRIAGE_BASE_MINUTES`: Base service minutes per patient (default: 15)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("TRIAGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting triage REST on {}", rest_addr);

    let patient_data_dir = std::env::var("PATIENT_DATA_DIR")
        .unwrap_or_else(|_| triage_core::constants::DEFAULT_PATIENT_DATA_DIR.into());
    let patient_data_path = PathBuf::from(&patient_data_dir);
    std::fs::create_dir_all(&patient_data_path)?;

    let base_minutes = base_minutes_from_env_value(std::env::var("TRIAGE_BASE_MINUTES").ok())?;

    let cfg = Arc::new(CoreConfig::new(patient_data_path, base_minutes)?);
    let state = AppState::new(PatientService::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
