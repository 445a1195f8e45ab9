//! State machine driven by explicit state changes and named events.

use crate::core::{History, HistoryEntry, MachineConfig};
use crate::machine::error::MachineError;

/// Finite state machine with linear undo/redo history.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{MachineConfig, StateConfig};
/// use waypoint::Machine;
///
/// let config = MachineConfig::new("idle")
///     .with_state(StateConfig::new("idle").on("run", "running"))
///     .with_state(StateConfig::new("running").on("stop", "idle"));
///
/// let mut machine = Machine::new(config);
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    config: MachineConfig,
    history: History,
}

impl Machine {
    /// Create a machine positioned at the configured initial state.
    ///
    /// The initial state is not checked against the declared states.
    pub fn new(config: MachineConfig) -> Self {
        let history = History::new(config.initial());
        Self { config, history }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`MachineError::MissingConfiguration`] when `config` is `None`.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self, MachineError> {
        config.map(Self::new).ok_or(MachineError::MissingConfiguration)
    }

    /// Name of the current state.
    pub fn state(&self) -> &str {
        &self.history.current().state
    }

    /// Move to `target`, which must be a configured state.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.config.contains(target) {
            tracing::debug!(from = self.state(), to = target, "rejected change to unknown state");
            return Err(MachineError::InvalidState {
                state: target.to_string(),
            });
        }

        tracing::debug!(from = self.state(), to = target, "state changed");
        self.history.record(HistoryEntry::new(target));
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The resolved target is trusted and not checked against the declared
    /// states.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let from = self.state();
        let Some(target) = self.config.resolve(from, event) else {
            tracing::debug!(from, event, "no transition for event");
            return Err(MachineError::InvalidTransition {
                state: from.to_string(),
                event: event.to_string(),
            });
        };

        tracing::debug!(from, to = target, event, "transition taken");
        let entry = HistoryEntry::via(target, event);
        self.history.record(entry);
        Ok(())
    }

    /// Return to the initial state and forget all history.
    pub fn reset(&mut self) {
        tracing::debug!(from = self.state(), to = self.config.initial(), "machine reset");
        self.history = History::new(self.config.initial());
    }

    /// Same as [`Machine::reset`].
    pub fn clear_history(&mut self) {
        self.reset();
    }

    /// Configured state names, in declared order.
    ///
    /// With an `event`, only the states that define a transition for it.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states()
                .iter()
                .filter(|s| s.handles(event))
                .map(|s| s.name.as_str())
                .collect(),
        }
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            tracing::debug!(to = self.state(), "undo");
        }
        moved
    }

    /// Go forward to an undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            tracing::debug!(to = self.state(), "redo");
        }
        moved
    }

    /// Check if there is a previous state to go back to (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if there is an undone state to go forward to (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Events the current state reacts to, sorted by name.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self
            .config
            .state(self.state())
            .map(|s| s.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default();
        events.sort_unstable();
        events
    }

    /// Get the configuration (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get state history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }
}
