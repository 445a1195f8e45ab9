//! Opt-in consistency checks for configurations.
//!
//! Machines trust their configuration: an undeclared initial state or a
//! transition into an undeclared state is only noticed when it is reached.
//! This module checks a configuration up front using Stillwater's
//! `Validation` type, reporting every problem in one pass.
//!
//! # Example
//!
//! ```rust
//! use waypoint::core::{MachineConfig, StateConfig};
//! use waypoint::validation::ConfigViolation;
//!
//! let config = MachineConfig::new("start")
//!     .with_state(StateConfig::new("idle").on("run", "running"));
//!
//! let violations = config.validate().unwrap_err();
//! assert_eq!(violations.len(), 2);
//! assert!(violations
//!     .iter()
//!     .any(|v| matches!(v, ConfigViolation::UnknownInitialState { .. })));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{ConfigCheck, ConfigRules};
pub use violations::ConfigViolation;

use crate::core::MachineConfig;

impl MachineConfig {
    /// Check the configuration against [`ConfigRules::standard`].
    pub fn validate(&self) -> Result<(), Vec<ConfigViolation>> {
        ConfigRules::standard().validate(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::machine_config;

    #[test]
    fn consistent_config_validates() {
        let config = machine_config! {
            initial: idle,
            idle => { run => running },
            running => { stop => idle },
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validation_is_never_implicit() {
        let config = machine_config! {
            initial: idle,
            idle => { run => running },
        };

        assert!(config.validate().is_err());
        let mut machine = crate::Machine::new(config);
        assert!(machine.trigger("run").is_ok());
    }
}
