//! Structured error handling for the Tally calculator.
//!
//! Two error kinds cover the whole workspace: `Validation` for operand text
//! that cannot be interpreted as a decimal value, and `Operation` for a
//! missing strategy, arithmetic domain violations, and persistence failures.

use thiserror::Error;

/// Error type for calculator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// Operand text that cannot be interpreted as a numeric value
    #[error("Validation error: {message}")]
    Validation { message: String, input: Option<String> },

    /// No strategy set, arithmetic domain violation, or persistence failure
    #[error("Operation error: {message}")]
    Operation { message: String, operation: Option<String> },
}

impl TallyError {
    /// Create a validation error without input context.
    pub fn validation(message: impl Into<String>) -> Self {
        TallyError::Validation { message: message.into(), input: None }
    }

    /// Create a validation error recording the offending input text.
    pub fn validation_for(input: impl Into<String>, message: impl Into<String>) -> Self {
        TallyError::Validation { message: message.into(), input: Some(input.into()) }
    }

    /// Create an operation error without operation context.
    pub fn operation(message: impl Into<String>) -> Self {
        TallyError::Operation { message: message.into(), operation: None }
    }

    /// Create an operation error naming the operation that failed.
    pub fn operation_in(operation: impl Into<String>, message: impl Into<String>) -> Self {
        TallyError::Operation { message: message.into(), operation: Some(operation.into()) }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            TallyError::Validation { .. } => "validation",
            TallyError::Operation { .. } => "operation",
        }
    }
}

/// Convenience result alias used throughout the workspace.
pub type TallyResult<T> = Result<T, TallyError>;
