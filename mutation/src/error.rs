//! Mutation error types.

use thiserror::Error;

use crate::operation::Operation;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Category of a [`MutationError`], for matching without the message fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationErrorKind {
    TypeMismatch,
    InvalidOperation,
    MissingArgument,
    DuplicateKey,
    KeyNotFound,
}

/// Errors that can occur during mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Invalid operation: '{op}'. Expected one of: add, update, delete")]
    InvalidOperation { op: String },

    #[error("Missing argument: {argument} is required for {operation}")]
    MissingArgument {
        argument: String,
        operation: Operation,
    },

    #[error("Key {key} already exists. Use update to modify it")]
    DuplicateKey { key: String },

    #[error("Key {key} not found{hint}")]
    KeyNotFound { key: String, hint: String },
}

impl MutationError {
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_operation(op: impl Into<String>) -> Self {
        Self::InvalidOperation { op: op.into() }
    }

    pub fn missing_argument(argument: impl Into<String>, operation: Operation) -> Self {
        Self::MissingArgument {
            argument: argument.into(),
            operation,
        }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Build a KeyNotFound error. A failed update suggests add instead.
    pub fn key_not_found(key: impl Into<String>, operation: Operation) -> Self {
        let hint = match operation {
            Operation::Update => ". Use add to insert it",
            Operation::Add | Operation::Delete => "",
        };
        Self::KeyNotFound {
            key: key.into(),
            hint: hint.to_string(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> MutationErrorKind {
        match self {
            Self::TypeMismatch { .. } => MutationErrorKind::TypeMismatch,
            Self::InvalidOperation { .. } => MutationErrorKind::InvalidOperation,
            Self::MissingArgument { .. } => MutationErrorKind::MissingArgument,
            Self::DuplicateKey { .. } => MutationErrorKind::DuplicateKey,
            Self::KeyNotFound { .. } => MutationErrorKind::KeyNotFound,
        }
    }
}
