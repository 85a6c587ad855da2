//! Error types for the demo.

use thiserror::Error;

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;

/// Errors that can occur when running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Unrecognised command-line argument.
    #[error("unknown argument '{arg}'")]
    UnknownArgument { arg: String },

    /// A scenario produced something other than its expected result.
    #[error("scenario '{scenario}' failed: {message}")]
    UnexpectedOutcome { scenario: String, message: String },
}

impl DemoError {
    pub fn unknown_argument(arg: impl Into<String>) -> Self {
        Self::UnknownArgument { arg: arg.into() }
    }

    pub fn unexpected_outcome(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedOutcome {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}
