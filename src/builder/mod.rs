//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder, a declarative macro and shortcut
//! constructors for common machine shapes.

pub mod config;
pub mod error;
pub mod macros;

pub use config::MachineConfigBuilder;
pub use error::BuildError;

use crate::core::{MachineConfig, StateConfig};

/// Create a configuration where `event` steps through `states` in order.
///
/// The first state is initial and the last one has no transitions.
///
/// # Example
///
/// ```
/// use waypoint::builder::sequence;
/// use waypoint::Machine;
///
/// let mut machine = Machine::new(sequence("next", &["draft", "review", "published"]).unwrap());
/// machine.trigger("next").unwrap();
/// machine.trigger("next").unwrap();
/// assert_eq!(machine.state(), "published");
/// assert!(machine.trigger("next").is_err());
/// ```
pub fn sequence(event: &str, states: &[&str]) -> Result<MachineConfig, BuildError> {
    let (first, _) = states.split_first().ok_or(BuildError::NoStates)?;

    let mut builder = MachineConfigBuilder::new().initial(*first);
    for (i, name) in states.iter().enumerate() {
        let mut state = StateConfig::new(*name);
        if let Some(next) = states.get(i + 1) {
            state = state.on(event, *next);
        }
        builder = builder.state(state)?;
    }
    builder.build()
}

/// Create a two-state configuration where `event` flips between `a` and `b`.
///
/// # Example
///
/// ```
/// use waypoint::builder::toggle;
///
/// let config = toggle("off", "on", "flip");
/// assert_eq!(config.resolve("off", "flip"), Some("on"));
/// assert_eq!(config.resolve("on", "flip"), Some("off"));
/// ```
pub fn toggle(a: &str, b: &str, event: &str) -> MachineConfig {
    MachineConfig::new(a)
        .with_state(StateConfig::new(a).on(event, b))
        .with_state(StateConfig::new(b).on(event, a))
}
