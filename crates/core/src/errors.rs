use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("course query topic must not be empty")]
    EmptyTopic,
    #[error("course query role must not be empty")]
    EmptyRole,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("integration failure: {0}")]
    Integration(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::{ApplicationError, DomainError};

    #[test]
    fn domain_error_wraps_into_application_error() {
        let application = ApplicationError::from(DomainError::EmptyTopic);
        assert!(matches!(application, ApplicationError::Domain(DomainError::EmptyTopic)));
        assert_eq!(application.to_string(), "course query topic must not be empty");
    }

    #[test]
    fn integration_error_carries_detail() {
        let error = ApplicationError::Integration("llm request timed out".to_string());
        assert_eq!(error.to_string(), "integration failure: llm request timed out");
    }
}
