/*
    errors.rs - Error types for the store subsystem

    Defines the failure taxonomy of collection store operations:
    - Validation: input rejected before reaching the backend
    - Backend: the remote call itself failed
*/

use crate::core_roster::model::ValidationErrors;
use crate::core_roster::remote::BackendError;
use thiserror::Error;

/// Errors that can occur in store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Input failed the validation schema; carries per-field messages
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Remote store call failed; prior local state is preserved
    #[error("Backend error: {0}")]
    Backend(BackendError),
}

impl StoreError {
    /// The field-keyed messages when this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            StoreError::Backend(_) => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<ValidationErrors> for StoreError {
    fn from(err: ValidationErrors) -> Self {
        StoreError::Validation(err)
    }
}

impl From<BackendError> for StoreError {
    fn from(err: BackendError) -> Self {
        StoreError::Backend(err)
    }
}
