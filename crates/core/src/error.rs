#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid priority label: '{0}'; accepted labels are: 'Emergência', 'Muita Urgência', 'Pouca Urgência', 'Não Urgência'")]
    InvalidPriorityLabel(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("a patient with national identifier {0} is already registered")]
    DuplicateNationalId(String),
    #[error("patient not found: {0}")]
    PatientNotFound(String),
    #[error("failed to create patient directory: {0}")]
    PatientDirCreation(std::io::Error),
    #[error("failed to write patient file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read patient file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove patient directory: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize patient: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize patient: {0}")]
    Deserialization(serde_json::Error),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn invalid_priority_label_enumerates_accepted_labels() {
        let err = TriageError::InvalidPriorityLabel("Urgentíssimo".into());
        let message = err.to_string();

        assert!(message.contains("Urgentíssimo"));
        assert!(message.contains("Emergência"));
        assert!(message.contains("Muita Urgência"));
        assert!(message.contains("Pouca Urgência"));
        assert!(message.contains("Não Urgência"));
    }
}
