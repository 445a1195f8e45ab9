//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. States keep the order in
//! which they were declared.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transitions available from a single state.
///
/// Maps event names to target state names.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateConfig;
///
/// let running = StateConfig::new("running")
///     .on("stop", "idle")
///     .on("pause", "paused");
///
/// assert_eq!(running.target("pause"), Some("paused"));
/// assert_eq!(running.target("run"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Name of the state
    pub name: String,
    /// Event name -> target state name
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

impl StateConfig {
    /// Create a state with no transitions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state defines one.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete configuration of a machine.
///
/// The configuration is trusted: neither `initial` nor the transition
/// targets are checked against the declared states when a machine is
/// created. Call [`MachineConfig::validate`] to check them explicitly.
///
/// When deserialized, a state listed more than once follows the same rule as
/// [`MachineConfig::with_state`]: the last definition wins and the first
/// position is kept. Use [`MachineConfigBuilder`](crate::builder::MachineConfigBuilder)
/// to reject duplicates instead.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{MachineConfig, StateConfig};
///
/// let config = MachineConfig::new("idle")
///     .with_state(StateConfig::new("idle").on("run", "running"))
///     .with_state(StateConfig::new("running").on("stop", "idle"));
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigRepr", into = "ConfigRepr")]
pub struct MachineConfig {
    initial: String,
    states: Vec<StateConfig>,
    index: HashMap<String, usize>,
}

/// Serialized form: the name index is rebuilt on load.
#[derive(Clone, Serialize, Deserialize)]
struct ConfigRepr {
    initial: String,
    #[serde(default)]
    states: Vec<StateConfig>,
}

impl From<ConfigRepr> for MachineConfig {
    fn from(repr: ConfigRepr) -> Self {
        repr.states
            .into_iter()
            .fold(MachineConfig::new(repr.initial), MachineConfig::with_state)
    }
}

impl From<MachineConfig> for ConfigRepr {
    fn from(config: MachineConfig) -> Self {
        Self {
            initial: config.initial,
            states: config.states,
        }
    }
}

impl MachineConfig {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Declare a state.
    ///
    /// Declaring a name twice replaces the earlier definition but keeps its
    /// original position in the declared order.
    pub fn with_state(mut self, state: StateConfig) -> Self {
        match self.index.get(&state.name) {
            Some(&pos) => self.states[pos] = state,
            None => {
                self.index.insert(state.name.clone(), self.states.len());
                self.states.push(state);
            }
        }
        self
    }

    /// Name of the initial state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Look up a state definition by name.
    pub fn state(&self, name: &str) -> Option<&StateConfig> {
        self.index.get(name).map(|&pos| &self.states[pos])
    }

    /// Whether `name` is a declared state.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All state definitions in declared order.
    pub fn states(&self) -> &[StateConfig] {
        &self.states
    }

    /// All state names in declared order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter().map(|s| s.name.as_str())
    }

    /// Resolve the target of `event` from `from`.
    ///
    /// Returns `None` when `from` is not declared or has no such event.
    pub fn resolve(&self, from: &str, event: &str) -> Option<&str> {
        self.state(from).and_then(|s| s.target(event))
    }
}
