//! Configuration problems reported by validation.

use thiserror::Error;

/// A single problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{state}' is not declared")]
    UnknownInitialState { state: String },

    #[error("Event '{event}' of state '{state}' targets undeclared state '{target}'")]
    UnknownTransitionTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("State name must not be empty")]
    EmptyStateName,

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
