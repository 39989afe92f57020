use deals_config::ConfigError;
use deals_core::{StoreError, SubmitError};
use thiserror::Error;

/// Failures surfaced by the `creator_deals_cli` front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("No scripted answer left for `{0}`")]
    ScriptExhausted(String),
    /// The listing was not created; the wizard surface already said why.
    #[error("listing was not created")]
    SubmissionFailed,
}

impl CliError {
    /// True when the user has already been shown this failure.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::SubmissionFailed)
    }
}
