use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use triage_core::{
    config::base_minutes_from_env_value, constants::DEFAULT_PATIENT_DATA_DIR, CoreConfig,
    NewPatient, Patient, PatientService, PatientUpdate, Priority, RecordId, VitalSigns,
    WaitEstimate,
};
use triage_types::{NationalId, NonEmptyText};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Hospital triage queue CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the waiting queue ordered by urgency
    List,
    /// Register a new patient
    Register {
        /// Patient name
        name: String,
        /// Age in years
        age: u32,
        /// National identifier
        national_id: String,
        /// Priority label (e.g. "Emergência")
        priority: String,
        /// Free-text symptom description
        #[arg(long)]
        symptoms: Option<String>,
        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        systolic_pressure: Option<f64>,
        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        diastolic_pressure: Option<f64>,
        /// Heart rate (beats per minute)
        #[arg(long)]
        heart_rate: Option<f64>,
        /// Body temperature (°C)
        #[arg(long)]
        temperature: Option<f64>,
        /// Triage timestamp (RFC 3339); defaults to now
        #[arg(long)]
        triaged_at: Option<String>,
    },
    /// Find a patient by national identifier
    Find {
        /// National identifier
        national_id: String,
    },
    /// Update a patient record
    Update {
        /// Record identifier (32 lowercase hex characters)
        id: String,
        /// Patient name
        name: String,
        /// Age in years
        age: u32,
        /// National identifier
        national_id: String,
        /// Priority label (e.g. "Emergência")
        priority: String,
        /// Free-text symptom description
        #[arg(long)]
        symptoms: Option<String>,
        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        systolic_pressure: Option<f64>,
        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        diastolic_pressure: Option<f64>,
        /// Heart rate (beats per minute)
        #[arg(long)]
        heart_rate: Option<f64>,
        /// Body temperature (°C)
        #[arg(long)]
        temperature: Option<f64>,
    },
    /// Remove a patient by national identifier
    Remove {
        /// National identifier
        national_id: String,
    },
    /// Estimate a patient's wait time
    Estimate {
        /// National identifier
        national_id: String,
        /// Number of available caregivers
        caregivers: i32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let patient_data_dir = std::env::var("PATIENT_DATA_DIR")
        .unwrap_or_else(|_| DEFAULT_PATIENT_DATA_DIR.into());
    let base_minutes = base_minutes_from_env_value(std::env::var("TRIAGE_BASE_MINUTES").ok())?;
    let cfg = Arc::new(CoreConfig::new(PathBuf::from(patient_data_dir), base_minutes)?);
    let service = PatientService::new(cfg);

    match cli.command {
        Some(Commands::List) => {
            let queue = service.waiting_queue();
            if queue.is_empty() {
                println!("No patients waiting.");
            } else {
                for (position, patient) in queue.iter().enumerate() {
                    print_queue_entry(position, patient);
                }
            }
        }
        Some(Commands::Register {
            name,
            age,
            national_id,
            priority,
            symptoms,
            systolic_pressure,
            diastolic_pressure,
            heart_rate,
            temperature,
            triaged_at,
        }) => {
            let triaged_at = triaged_at.as_deref().map(parse_timestamp).transpose()?;

            let new_patient = NewPatient {
                name: NonEmptyText::new(&name)?,
                age,
                national_id: NationalId::new(&national_id)?,
                symptoms,
                priority: Priority::from_label(&priority)?,
                vitals: VitalSigns {
                    systolic_pressure,
                    diastolic_pressure,
                    heart_rate,
                    temperature,
                },
                triaged_at,
            };

            match service.register_patient(new_patient) {
                Ok(patient) => println!(
                    "Registered {} with record ID: {}",
                    patient.name, patient.id
                ),
                Err(e) => eprintln!("Error registering patient: {}", e),
            }
        }
        Some(Commands::Find { national_id }) => {
            let national_id = NationalId::new(&national_id)?;
            match service.find_by_national_id(&national_id) {
                Ok(Some(patient)) => print_patient(&patient),
                Ok(None) => println!("No patient found with national ID {}", national_id),
                Err(e) => eprintln!("Error finding patient: {}", e),
            }
        }
        Some(Commands::Update {
            id,
            name,
            age,
            national_id,
            priority,
            symptoms,
            systolic_pressure,
            diastolic_pressure,
            heart_rate,
            temperature,
        }) => {
            let id: RecordId = id.parse()?;
            let update = PatientUpdate {
                name: NonEmptyText::new(&name)?,
                age,
                national_id: NationalId::new(&national_id)?,
                symptoms,
                priority: Priority::from_label(&priority)?,
                vitals: VitalSigns {
                    systolic_pressure,
                    diastolic_pressure,
                    heart_rate,
                    temperature,
                },
            };

            match service.update_patient(&id, update) {
                Ok(patient) => println!("Updated patient {}", patient.id),
                Err(e) => eprintln!("Error updating patient: {}", e),
            }
        }
        Some(Commands::Remove { national_id }) => {
            let national_id = NationalId::new(&national_id)?;
            match service.remove_by_national_id(&national_id) {
                Ok(()) => println!("Removed patient with national ID {}", national_id),
                Err(e) => eprintln!("Error removing patient: {}", e),
            }
        }
        Some(Commands::Estimate {
            national_id,
            caregivers,
        }) => {
            let national_id = NationalId::new(&national_id)?;
            match service.estimate_wait(&national_id, caregivers) {
                WaitEstimate::Queued { hours, minutes } => println!(
                    "Estimated wait for {}: {} hours and {} minutes.",
                    national_id, hours, minutes
                ),
                WaitEstimate::NotInQueue => {
                    println!("Patient is not in the waiting queue (already treated or not registered).")
                }
                WaitEstimate::NoCaregivers => {
                    println!("No caregivers available, wait time is undefined.")
                }
            }
        }
        None => {
            println!("Use 'triage --help' for commands");
        }
    }

    Ok(())
}

fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, triage_core::TriageError> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            triage_core::TriageError::InvalidInput(format!(
                "invalid RFC 3339 timestamp: '{input}'"
            ))
        })
}

fn print_queue_entry(position: usize, patient: &Patient) {
    println!(
        "{}. [{}] {} (national ID {}), triaged at {}",
        position + 1,
        patient.priority,
        patient.name,
        patient.national_id,
        patient.triaged_at.to_rfc3339()
    );
}

fn print_patient(patient: &Patient) {
    println!("ID: {}", patient.id);
    println!("Name: {}", patient.name);
    println!("Age: {}", patient.age);
    println!("National ID: {}", patient.national_id);
    println!("Priority: {}", patient.priority);
    if let Some(symptoms) = &patient.symptoms {
        println!("Symptoms: {}", symptoms);
    }
    println!("Triaged at: {}", patient.triaged_at.to_rfc3339());
}
