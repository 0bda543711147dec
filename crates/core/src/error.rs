use dra_types::{PatientId, TextError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("patient not found: {0}")]
    PatientNotFound(PatientId),
    #[error("collaborator failure: {0}")]
    Provider(#[from] ProviderError),
    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("invalid text: {0}")]
    Text(#[from] TextError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Failures raised by patient or note collaborators.
///
/// These are propagated to the caller as a failure of the whole report computation. No retry
/// happens inside the engine.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_failure_converts_into_core_error() {
        let err: CoreError = ProviderError::Unavailable("patient service down".into()).into();
        assert!(matches!(err, CoreError::Provider(ProviderError::Unavailable(_))));
        assert_eq!(
            err.to_string(),
            "collaborator failure: collaborator unavailable: patient service down"
        );
    }
}
