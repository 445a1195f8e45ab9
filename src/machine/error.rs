//! Errors returned by machine operations.

use thiserror::Error;

/// Errors that can occur when creating or driving a machine.
///
/// Every operation that returns one of these leaves the machine unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("No configuration supplied")]
    MissingConfiguration,

    #[error("State '{state}' is not configured")]
    InvalidState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}
