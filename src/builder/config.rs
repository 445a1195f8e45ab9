//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateConfig};

/// Builder for constructing configurations with a fluent API.
///
/// Unlike [`MachineConfig::with_state`], the builder rejects duplicate
/// states and transitions from undeclared states.
pub struct MachineConfigBuilder {
    initial: Option<String>,
    states: Vec<StateConfig>,
}

impl MachineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state.
    /// Returns an error if a state with the same name was already declared.
    pub fn state(mut self, state: StateConfig) -> Result<Self, BuildError> {
        if self.states.iter().any(|s| s.name == state.name) {
            return Err(BuildError::DuplicateState { state: state.name });
        }
        self.states.push(state);
        Ok(self)
    }

    /// Declare several states at once.
    pub fn states(self, states: Vec<StateConfig>) -> Result<Self, BuildError> {
        states.into_iter().try_fold(self, Self::state)
    }

    /// Add a transition to an already declared state.
    pub fn transition(
        mut self,
        from: &str,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let source = self
            .states
            .iter_mut()
            .find(|s| s.name == from)
            .ok_or_else(|| BuildError::UnknownTransitionSource {
                state: from.to_string(),
            })?;
        source.transitions.insert(event.into(), to.into());
        Ok(self)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(self
            .states
            .into_iter()
            .fold(MachineConfig::new(initial), MachineConfig::with_state))
    }
}

impl Default for MachineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
