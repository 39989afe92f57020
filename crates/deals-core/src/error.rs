use thiserror::Error;

/// A required field on the step being left is missing.
///
/// Carries exactly one user-facing message; validators stop at the first
/// violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn missing(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failures reported by a listing store write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("listing rejected: {0}")]
    Rejected(String),
    #[error("listing store unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InProgress,
    #[error("submission is only available on the final step (on step {current} of {total})")]
    NotOnTerminalStep { current: usize, total: usize },
    #[error("step {step} ({title}) is incomplete: {error}")]
    IncompleteStep {
        step: usize,
        title: &'static str,
        error: ValidationError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}
